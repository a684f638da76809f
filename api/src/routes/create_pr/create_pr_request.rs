use github_gateway::types::NewPullRequest;
use serde::Deserialize;

/// JSON body for the create-pull-request operation.
#[derive(Debug, Deserialize)]
pub struct CreatePullRequestRequest {
    /// Repository owner/organization.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Base branch the pull request targets.
    #[serde(default = "default_base")]
    pub base: String,
    /// Name for the new branch.
    pub branch_name: String,
    /// Pull request title.
    pub title: String,
    /// Pull request description.
    pub body: String,
    /// Path where the file should be created (e.g. "docs/new.md").
    pub file_path: String,
    /// Content of the file to be added.
    pub file_content: String,
}

fn default_base() -> String {
    "main".into()
}

impl From<CreatePullRequestRequest> for NewPullRequest {
    fn from(req: CreatePullRequestRequest) -> Self {
        NewPullRequest {
            owner: req.owner,
            repo: req.repo,
            base: req.base,
            branch_name: req.branch_name,
            title: req.title,
            body: req.body,
            file_path: req.file_path,
            file_content: req.file_content,
        }
    }
}
