//! Branch passthrough endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use tracing::instrument;

use crate::core::app_state::AppState;
use crate::core::http::response_envelope::ApiResponse;
use crate::error_handler::AppResult;

#[instrument(name = "list_branches_route", skip(state, headers))]
pub async fn list_branches_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((owner, repo)): Path<(String, String)>,
) -> AppResult<Response> {
    let gateway = state.gateway(&headers)?;
    let branches = gateway.list_branches(&owner, &repo).await?;

    Ok(ApiResponse::success(branches).into_response_with_status(StatusCode::OK))
}

#[instrument(name = "get_branch_route", skip(state, headers))]
pub async fn get_branch_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((owner, repo, branch)): Path<(String, String, String)>,
) -> AppResult<Response> {
    let gateway = state.gateway(&headers)?;
    let found = gateway.get_branch(&owner, &repo, &branch).await?;

    Ok(ApiResponse::success(found).into_response_with_status(StatusCode::OK))
}

/// Deletes a branch ref; upstream answers 204, surfaced as `data: true`.
#[instrument(name = "delete_branch_route", skip(state, headers))]
pub async fn delete_branch_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((owner, repo, branch)): Path<(String, String, String)>,
) -> AppResult<Response> {
    let gateway = state.gateway(&headers)?;
    let deleted = gateway.delete_branch(&owner, &repo, &branch).await?;

    Ok(ApiResponse::success(deleted).into_response_with_status(StatusCode::OK))
}
