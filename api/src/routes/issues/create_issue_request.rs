use serde::Deserialize;

/// JSON body for issue creation.
#[derive(Debug, Deserialize)]
pub struct CreateIssueRequest {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

/// JSON body for commenting on an issue.
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub body: String,
}
