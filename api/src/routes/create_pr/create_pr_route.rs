//! HTTP endpoint for the create-pull-request choreography.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use tracing::{info, instrument};

use crate::core::app_state::AppState;
use crate::core::http::response_envelope::ApiResponse;
use crate::error_handler::AppResult;
use crate::routes::create_pr::{
    create_pr_request::CreatePullRequestRequest, create_pr_response::CreatePullRequestResponse,
};

/// Creates a branch, commits one new file onto it and opens a pull request.
///
/// The whole operation is a fixed sequence of upstream calls; the first
/// failing call aborts it with the upstream status preserved. Effects of
/// already completed steps stay in place upstream.
#[instrument(
    name = "create_pr_route",
    skip(state, headers, body),
    fields(owner = %body.owner, repo = %body.repo, branch = %body.branch_name)
)]
pub async fn create_pr_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<CreatePullRequestRequest>,
) -> AppResult<Response> {
    let gateway = state.gateway(&headers)?;

    let pull_request = gateway.create_pull_request(&body.into()).await?;

    info!(number = pull_request.number, "pull request created");

    let response = CreatePullRequestResponse {
        message: "Pull request created successfully".into(),
        pull_request,
    };

    Ok(ApiResponse::success(response).into_response_with_status(StatusCode::OK))
}
