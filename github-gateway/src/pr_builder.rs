//! Pull-request builder: the multi-step "create pull request with a new
//! file" choreography against the GitHub git-data API.
//!
//! Endpoints used, in fixed order:
//!   1. GET   /repos/{owner}/{repo}/git/refs/heads/{base}
//!   2. POST  /repos/{owner}/{repo}/git/refs
//!   3. POST  /repos/{owner}/{repo}/git/blobs
//!   4. GET   /repos/{owner}/{repo}/git/commits/{base_sha}
//!   5. POST  /repos/{owner}/{repo}/git/trees
//!   6. POST  /repos/{owner}/{repo}/git/commits
//!   7. PATCH /repos/{owner}/{repo}/git/refs/heads/{branch}
//!   8. POST  /repos/{owner}/{repo}/pulls
//!
//! Each step consumes a sha produced by an earlier step, so the sequence is
//! strictly sequential. GitHub offers no transaction across these calls and
//! this builder performs no compensation: a failure at step N leaves the
//! refs/blobs/commits created by steps 1..N-1 in place upstream.

use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info, instrument};
use urlencoding::encode;

use crate::GitHubGateway;
use crate::errors::{GatewayError, GatewayResult};
use crate::types::{NewPullRequest, PullRequestResult};

/// File mode for a regular (non-executable) blob entry.
const BLOB_FILE_MODE: &str = "100644";

impl GitHubGateway {
    /// Runs the eight-step choreography and returns the reshaped
    /// pull-request summary.
    ///
    /// Fails at the first unsuccessful step with the upstream status
    /// preserved (missing base branch surfaces as 404, an already existing
    /// branch as 422). Already-applied upstream effects are never undone.
    #[instrument(
        name = "create_pull_request",
        skip(self, req),
        fields(owner = %req.owner, repo = %req.repo, branch = %req.branch_name)
    )]
    pub async fn create_pull_request(
        &self,
        req: &NewPullRequest,
    ) -> GatewayResult<PullRequestResult> {
        let repo = format!("repos/{}/{}", req.owner, req.repo);

        // 1) Resolve the base branch ref to its commit sha.
        let base_ref: GitRef = decode_step(
            "base ref",
            self.client
                .call(
                    Method::GET,
                    &format!("{repo}/git/refs/heads/{}", encode(&req.base)),
                    None,
                    &[],
                )
                .await?,
        )?;
        let base_sha = base_ref.object.sha;
        debug!("base ref resolved: {} -> {}", req.base, base_sha);

        // 2) Create the new branch ref pointing at the base sha. A 422
        // (reference already exists) propagates verbatim.
        self.client
            .call(
                Method::POST,
                &format!("{repo}/git/refs"),
                Some(&json!({
                    "ref": format!("refs/heads/{}", req.branch_name),
                    "sha": base_sha,
                })),
                &[],
            )
            .await?;
        debug!("branch ref created: refs/heads/{}", req.branch_name);

        // 3) Create a blob from the file content. Textual content only; the
        // body is sent verbatim with utf-8 encoding, never base64.
        let blob: ShaOnly = decode_step(
            "blob",
            self.client
                .call(
                    Method::POST,
                    &format!("{repo}/git/blobs"),
                    Some(&json!({
                        "content": req.file_content,
                        "encoding": "utf-8",
                    })),
                    &[],
                )
                .await?,
        )?;
        debug!("blob created: {}", blob.sha);

        // 4) Read the base commit to obtain its tree sha.
        let base_commit: GitCommit = decode_step(
            "base commit",
            self.client
                .call(
                    Method::GET,
                    &format!("{repo}/git/commits/{base_sha}"),
                    None,
                    &[],
                )
                .await?,
        )?;
        debug!("base tree resolved: {}", base_commit.tree.sha);

        // 5) Create a tree overlaying the single new file on the base tree.
        let tree: ShaOnly = decode_step(
            "tree",
            self.client
                .call(
                    Method::POST,
                    &format!("{repo}/git/trees"),
                    Some(&json!({
                        "base_tree": base_commit.tree.sha,
                        "tree": [{
                            "path": req.file_path,
                            "mode": BLOB_FILE_MODE,
                            "type": "blob",
                            "sha": blob.sha,
                        }],
                    })),
                    &[],
                )
                .await?,
        )?;
        debug!("tree created: {}", tree.sha);

        // 6) Create the commit with the base commit as the single parent.
        let commit: ShaOnly = decode_step(
            "commit",
            self.client
                .call(
                    Method::POST,
                    &format!("{repo}/git/commits"),
                    Some(&json!({
                        "message": format!("Add {}", req.file_path),
                        "tree": tree.sha,
                        "parents": [base_sha],
                    })),
                    &[],
                )
                .await?,
        )?;
        debug!("commit created: {}", commit.sha);

        // 7) Advance the new branch ref to the commit. The ref was created
        // at base_sha in step 2, so this is a fast-forward; force stays off.
        self.client
            .call(
                Method::PATCH,
                &format!("{repo}/git/refs/heads/{}", encode(&req.branch_name)),
                Some(&json!({
                    "sha": commit.sha,
                    "force": false,
                })),
                &[],
            )
            .await?;
        debug!("branch ref updated to {}", commit.sha);

        // 8) Open the pull request and reshape the response.
        let pr: PullRequestResult = decode_step(
            "pull request",
            self.client
                .call(
                    Method::POST,
                    &format!("{repo}/pulls"),
                    Some(&json!({
                        "base": req.base,
                        "head": format!("{}:{}", req.owner, req.branch_name),
                        "title": req.title,
                        "body": req.body,
                    })),
                    &[],
                )
                .await?,
        )?;

        info!(
            number = pr.number,
            url = %pr.html_url,
            "pull request opened"
        );

        Ok(pr)
    }
}

/// Decodes one step's 2xx body into its typed subset.
fn decode_step<T: DeserializeOwned>(what: &str, value: Value) -> GatewayResult<T> {
    serde_json::from_value(value)
        .map_err(|e| GatewayError::InvalidResponse(format!("{what} response: {e}")))
}

/// Ref read response (subset).
#[derive(Debug, Deserialize)]
struct GitRef {
    object: GitObject,
}

#[derive(Debug, Deserialize)]
struct GitObject {
    sha: String,
}

/// Commit read response (subset).
#[derive(Debug, Deserialize)]
struct GitCommit {
    tree: ShaOnly,
}

/// Create responses for blobs, trees and commits all reduce to a sha.
#[derive(Debug, Deserialize)]
struct ShaOnly {
    sha: String,
}
