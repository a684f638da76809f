//! Repository passthrough endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use tracing::instrument;

use crate::core::app_state::AppState;
use crate::core::http::response_envelope::ApiResponse;
use crate::error_handler::AppResult;

#[instrument(name = "list_repos_route", skip(state, headers))]
pub async fn list_repos_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let gateway = state.gateway(&headers)?;
    let repos = gateway.list_repos().await?;

    Ok(ApiResponse::success(repos).into_response_with_status(StatusCode::OK))
}

#[instrument(name = "get_repo_route", skip(state, headers))]
pub async fn get_repo_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((owner, repo)): Path<(String, String)>,
) -> AppResult<Response> {
    let gateway = state.gateway(&headers)?;
    let repository = gateway.get_repo(&owner, &repo).await?;

    Ok(ApiResponse::success(repository).into_response_with_status(StatusCode::OK))
}
