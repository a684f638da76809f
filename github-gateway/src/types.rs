//! Gateway-owned data types.
//!
//! Pass-through payloads (list/get operations) stay as loose
//! `serde_json::Value`; typed structs exist only where this service reshapes
//! upstream output into a stable contract.

use serde::{Deserialize, Serialize};

/// Input for the create-pull-request choreography.
///
/// All fields are caller-supplied and immutable for the duration of one
/// operation. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct NewPullRequest {
    pub owner: String,
    pub repo: String,
    /// Base branch the pull request targets, e.g. "main".
    pub base: String,
    /// Name of the branch to create on top of `base`.
    pub branch_name: String,
    pub title: String,
    pub body: String,
    /// Path of the single file added by the new commit.
    pub file_path: String,
    /// Textual file content; binary content is out of scope.
    pub file_content: String,
}

/// Input for issue creation.
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Option<Vec<String>>,
}

/// A named ref together with the commit sha it points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefPointer {
    #[serde(rename = "ref")]
    pub r#ref: String,
    pub sha: String,
}

/// Reshaped pull-request summary returned to the caller.
///
/// This is an explicit whitelist: deserialization drops every other field
/// the upstream response carries, so re-serialization exposes exactly this
/// subset and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestResult {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub state: String,
    pub head: RefPointer,
    pub base: RefPointer,
}

/// Reshaped summary for a freshly created issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCreated {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub state: String,
}
