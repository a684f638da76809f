//! HTTP layer: router construction, shared state and server lifecycle.

use std::{error::Error, sync::Arc};

mod core;
mod error_handler;
mod middleware_layer;
mod routes;

pub use crate::core::app_state::{AppState, Config};
pub use error_handler::{AppError, AppResult};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::middleware_layer::json_extractor::json_error_mapper;
use crate::routes::{
    branches_routes, create_pr::create_pr_route::create_pr_route, issues::issues_routes,
    meta_routes, pulls_routes, repos_routes, suggest_fix::suggest_fix_route::suggest_fix_route,
};

/// Builds the application router. Exposed separately from [`start`] so
/// tests can drive the surface against their own listener and config.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(meta_routes::root))
        .route("/health", get(meta_routes::health))
        .route("/repos", get(repos_routes::list_repos_route))
        .route("/repos/{owner}/{repo}", get(repos_routes::get_repo_route))
        .route(
            "/repos/{owner}/{repo}/branches",
            get(branches_routes::list_branches_route),
        )
        .route(
            "/repos/{owner}/{repo}/branches/{branch}",
            get(branches_routes::get_branch_route).delete(branches_routes::delete_branch_route),
        )
        .route(
            "/repos/{owner}/{repo}/issues",
            get(issues_routes::list_issues_route).post(issues_routes::create_issue_route),
        )
        .route(
            "/repos/{owner}/{repo}/issues/{number}",
            get(issues_routes::get_issue_route),
        )
        .route(
            "/repos/{owner}/{repo}/issues/{number}/comments",
            post(issues_routes::comment_on_issue_route),
        )
        .route(
            "/repos/{owner}/{repo}/pulls",
            get(pulls_routes::list_pulls_route),
        )
        .route(
            "/repos/{owner}/{repo}/pulls/{number}",
            get(pulls_routes::get_pull_route),
        )
        .route("/create-pull-request", post(create_pr_route))
        .route("/suggest-fix", post(suggest_fix_route))
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl+C.
pub async fn start() -> Result<(), Box<dyn Error>> {
    let state = Arc::new(AppState {
        config: Config::from_env(),
    });
    let addr = state.config.bind_addr.clone();

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
    }
}
