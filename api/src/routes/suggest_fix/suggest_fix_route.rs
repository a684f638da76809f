//! HTTP endpoint composing issue fetch, suggestion generation and comment
//! posting.

use std::sync::Arc;

use ai_suggest_service::prompt::issue_fix_prompt;
use ai_suggest_service::{OllamaService, SuggestConfig};
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::core::app_state::AppState;
use crate::core::http::response_envelope::ApiResponse;
use crate::error_handler::AppResult;
use crate::routes::suggest_fix::{
    suggest_fix_request::SuggestFixRequest, suggest_fix_response::SuggestFixResponse,
};

/// Fetches an issue, asks the inference service for a fix suggestion and
/// posts it back as a comment.
///
/// The GitHub calls are fail-fast like everywhere else, but the inference
/// call is not: a dead or misconfigured model degrades into a placeholder
/// suggestion that still gets posted.
#[instrument(
    name = "suggest_fix_route",
    skip(state, headers, body),
    fields(owner = %body.owner, repo = %body.repo, issue = body.issue_number)
)]
pub async fn suggest_fix_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<SuggestFixRequest>,
) -> AppResult<Response> {
    let gateway = state.gateway(&headers)?;

    // 1) The issue must exist; a 404 propagates to the caller.
    let issue = gateway
        .get_issue(&body.owner, &body.repo, body.issue_number)
        .await?;
    let title = issue
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("(untitled)");
    let issue_body = issue.get("body").and_then(Value::as_str);

    // 2) Generate the suggestion; failures degrade instead of aborting.
    let suggestion = generate_suggestion(&state, title, issue_body).await;

    // 3) Post the comment with the fixed header naming the model.
    let comment_body = format!(
        "### Suggested fix (model: {})\n\n{}",
        state.config.ollama_model, suggestion
    );
    let comment = gateway
        .comment_on_issue(&body.owner, &body.repo, body.issue_number, &comment_body)
        .await?;
    let comment_url = comment
        .get("html_url")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    info!(%comment_url, "suggestion comment posted");

    Ok(
        ApiResponse::success(SuggestFixResponse {
            comment_url,
            suggestion,
        })
        .into_response_with_status(StatusCode::OK),
    )
}

/// Runs the inference call, folding every failure into a readable
/// placeholder so the enclosing request keeps going.
async fn generate_suggestion(state: &AppState, title: &str, issue_body: Option<&str>) -> String {
    let service = OllamaService::new(SuggestConfig {
        model: state.config.ollama_model.clone(),
        endpoint: state.config.ollama_endpoint.clone(),
        timeout_secs: Some(state.config.suggest_timeout_secs),
    });

    let result = match service {
        Ok(service) => service.generate(&issue_fix_prompt(title, issue_body)).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(text) => text,
        Err(err) => {
            warn!(%err, "suggestion generation failed; posting placeholder");
            format!("Error: unable to generate suggestion ({err})")
        }
    }
}
