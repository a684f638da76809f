//! Single-call wrapper operations over the generic client.
//!
//! List/get/delete results are forwarded as loose JSON; only issue creation
//! reshapes its response (pull-request creation lives in `pr_builder`).

use reqwest::Method;
use serde_json::{Value, json};
use tracing::debug;
use urlencoding::encode;

use crate::GitHubGateway;
use crate::errors::{GatewayError, GatewayResult};
use crate::types::{IssueCreated, NewIssue};

impl GitHubGateway {
    /// Lists repositories accessible to the token's user.
    pub async fn list_repos(&self) -> GatewayResult<Value> {
        self.client.call(Method::GET, "user/repos", None, &[]).await
    }

    /// Fetches a single repository.
    pub async fn get_repo(&self, owner: &str, repo: &str) -> GatewayResult<Value> {
        self.client
            .call(Method::GET, &format!("repos/{owner}/{repo}"), None, &[])
            .await
    }

    /// Lists branches of a repository.
    pub async fn list_branches(&self, owner: &str, repo: &str) -> GatewayResult<Value> {
        self.client
            .call(
                Method::GET,
                &format!("repos/{owner}/{repo}/branches"),
                None,
                &[],
            )
            .await
    }

    /// Fetches a single branch.
    pub async fn get_branch(&self, owner: &str, repo: &str, branch: &str) -> GatewayResult<Value> {
        self.client
            .call(
                Method::GET,
                &format!("repos/{owner}/{repo}/branches/{}", encode(branch)),
                None,
                &[],
            )
            .await
    }

    /// Deletes a branch ref. Upstream answers 204 with no body, which the
    /// client surfaces as `true`.
    pub async fn delete_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> GatewayResult<Value> {
        debug!("deleting branch {owner}/{repo}@{branch}");
        self.client
            .call(
                Method::DELETE,
                &format!("repos/{owner}/{repo}/git/refs/heads/{}", encode(branch)),
                None,
                &[],
            )
            .await
    }

    /// Lists issues, optionally filtered by state ("open", "closed", "all").
    pub async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        state: Option<&str>,
    ) -> GatewayResult<Value> {
        let query: Vec<(&str, &str)> = state.map(|s| ("state", s)).into_iter().collect();
        self.client
            .call(
                Method::GET,
                &format!("repos/{owner}/{repo}/issues"),
                None,
                &query,
            )
            .await
    }

    /// Fetches a single issue.
    pub async fn get_issue(&self, owner: &str, repo: &str, number: u64) -> GatewayResult<Value> {
        self.client
            .call(
                Method::GET,
                &format!("repos/{owner}/{repo}/issues/{number}"),
                None,
                &[],
            )
            .await
    }

    /// Creates an issue and reshapes the response into a stable summary.
    pub async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        issue: &NewIssue,
    ) -> GatewayResult<IssueCreated> {
        let mut body = json!({
            "title": issue.title,
            "body": issue.body,
        });
        if let Some(labels) = &issue.labels {
            body["labels"] = json!(labels);
        }

        let created = self
            .client
            .call(
                Method::POST,
                &format!("repos/{owner}/{repo}/issues"),
                Some(&body),
                &[],
            )
            .await?;

        serde_json::from_value(created)
            .map_err(|e| GatewayError::InvalidResponse(format!("issue response: {e}")))
    }

    /// Posts a comment on an issue, returning the upstream comment payload.
    pub async fn comment_on_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> GatewayResult<Value> {
        self.client
            .call(
                Method::POST,
                &format!("repos/{owner}/{repo}/issues/{number}/comments"),
                Some(&json!({ "body": body })),
                &[],
            )
            .await
    }

    /// Lists pull requests, optionally filtered by state.
    pub async fn list_pulls(
        &self,
        owner: &str,
        repo: &str,
        state: Option<&str>,
    ) -> GatewayResult<Value> {
        let query: Vec<(&str, &str)> = state.map(|s| ("state", s)).into_iter().collect();
        self.client
            .call(
                Method::GET,
                &format!("repos/{owner}/{repo}/pulls"),
                None,
                &query,
            )
            .await
    }

    /// Fetches a single pull request.
    pub async fn get_pull(&self, owner: &str, repo: &str, number: u64) -> GatewayResult<Value> {
        self.client
            .call(
                Method::GET,
                &format!("repos/{owner}/{repo}/pulls/{number}"),
                None,
                &[],
            )
            .await
    }
}
