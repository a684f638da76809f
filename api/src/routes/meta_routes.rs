//! Root and liveness endpoints.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Welcome endpoint enumerating the available routes.
pub async fn root() -> Response {
    Json(json!({
        "message": "gh-bridge-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /health": "Liveness probe",
            "GET /repos": "List repositories of the token's user",
            "GET /repos/{owner}/{repo}": "Get a repository",
            "GET /repos/{owner}/{repo}/branches": "List branches",
            "GET /repos/{owner}/{repo}/branches/{branch}": "Get a branch",
            "DELETE /repos/{owner}/{repo}/branches/{branch}": "Delete a branch",
            "GET /repos/{owner}/{repo}/issues": "List issues",
            "POST /repos/{owner}/{repo}/issues": "Create an issue",
            "GET /repos/{owner}/{repo}/issues/{number}": "Get an issue",
            "POST /repos/{owner}/{repo}/issues/{number}/comments": "Comment on an issue",
            "GET /repos/{owner}/{repo}/pulls": "List pull requests",
            "GET /repos/{owner}/{repo}/pulls/{number}": "Get a pull request",
            "POST /create-pull-request": "Create a pull request adding one file",
            "POST /suggest-fix": "Draft an AI fix suggestion as an issue comment",
        }
    }))
    .into_response()
}

/// Health check endpoint.
pub async fn health() -> Response {
    Json(json!({
        "status": "healthy",
        "service": "gh-bridge-backend"
    }))
    .into_response()
}
