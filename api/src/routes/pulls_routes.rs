//! Pull-request passthrough endpoints (read side; creation lives in
//! `create_pr`).

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use serde::Deserialize;
use tracing::instrument;

use crate::core::app_state::AppState;
use crate::core::http::response_envelope::ApiResponse;
use crate::error_handler::AppResult;

#[derive(Debug, Deserialize)]
pub struct ListPullsQuery {
    /// Upstream state filter: "open", "closed" or "all".
    pub state: Option<String>,
}

#[instrument(name = "list_pulls_route", skip(state, headers, query))]
pub async fn list_pulls_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((owner, repo)): Path<(String, String)>,
    Query(query): Query<ListPullsQuery>,
) -> AppResult<Response> {
    let gateway = state.gateway(&headers)?;
    let pulls = gateway
        .list_pulls(&owner, &repo, query.state.as_deref())
        .await?;

    Ok(ApiResponse::success(pulls).into_response_with_status(StatusCode::OK))
}

#[instrument(name = "get_pull_route", skip(state, headers))]
pub async fn get_pull_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((owner, repo, number)): Path<(String, String, u64)>,
) -> AppResult<Response> {
    let gateway = state.gateway(&headers)?;
    let pull = gateway.get_pull(&owner, &repo, number).await?;

    Ok(ApiResponse::success(pull).into_response_with_status(StatusCode::OK))
}
