use github_gateway::types::PullRequestResult;
use serde::Serialize;

/// Success payload for the create-pull-request operation.
#[derive(Debug, Serialize)]
pub struct CreatePullRequestResponse {
    pub message: String,
    pub pull_request: PullRequestResult,
}
