//! Issue endpoints: passthrough reads, reshaped creation, commenting.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use github_gateway::types::NewIssue;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::app_state::AppState;
use crate::core::http::response_envelope::ApiResponse;
use crate::error_handler::AppResult;
use crate::routes::issues::create_issue_request::{CommentRequest, CreateIssueRequest};

#[derive(Debug, Deserialize)]
pub struct ListIssuesQuery {
    /// Upstream state filter: "open", "closed" or "all".
    pub state: Option<String>,
}

#[instrument(name = "list_issues_route", skip(state, headers, query))]
pub async fn list_issues_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((owner, repo)): Path<(String, String)>,
    Query(query): Query<ListIssuesQuery>,
) -> AppResult<Response> {
    let gateway = state.gateway(&headers)?;
    let issues = gateway
        .list_issues(&owner, &repo, query.state.as_deref())
        .await?;

    Ok(ApiResponse::success(issues).into_response_with_status(StatusCode::OK))
}

#[instrument(name = "get_issue_route", skip(state, headers))]
pub async fn get_issue_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((owner, repo, number)): Path<(String, String, u64)>,
) -> AppResult<Response> {
    let gateway = state.gateway(&headers)?;
    let issue = gateway.get_issue(&owner, &repo, number).await?;

    Ok(ApiResponse::success(issue).into_response_with_status(StatusCode::OK))
}

/// Creates an issue; the response is the reshaped summary, not the full
/// upstream payload.
#[instrument(name = "create_issue_route", skip(state, headers, body), fields(title = %body.title))]
pub async fn create_issue_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((owner, repo)): Path<(String, String)>,
    Json(body): Json<CreateIssueRequest>,
) -> AppResult<Response> {
    let gateway = state.gateway(&headers)?;

    let issue = NewIssue {
        title: body.title,
        body: body.body,
        labels: body.labels,
    };
    let created = gateway.create_issue(&owner, &repo, &issue).await?;

    info!(number = created.number, "issue created");

    Ok(ApiResponse::success(created).into_response_with_status(StatusCode::OK))
}

#[instrument(name = "comment_on_issue_route", skip(state, headers, body))]
pub async fn comment_on_issue_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((owner, repo, number)): Path<(String, String, u64)>,
    Json(body): Json<CommentRequest>,
) -> AppResult<Response> {
    let gateway = state.gateway(&headers)?;
    let comment = gateway
        .comment_on_issue(&owner, &repo, number, &body.body)
        .await?;

    Ok(ApiResponse::success(comment).into_response_with_status(StatusCode::OK))
}
