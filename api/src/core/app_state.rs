use axum::http::HeaderMap;
use github_gateway::{GatewayConfig, GitHubGateway};

use crate::core::auth::bearer_token;
use crate::error_handler::AppResult;

/// Read-only process configuration, built once at startup and shared with
/// every handler. There is no global mutable state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address, e.g. "0.0.0.0:8000".
    pub bind_addr: String,
    /// API base for GitHub, e.g. "https://api.github.com".
    pub github_api_base: String,
    /// Fallback token used when a request carries no Authorization header.
    pub default_token: Option<String>,
    /// Ollama endpoint for suggestion generation.
    pub ollama_endpoint: String,
    /// Model used for suggestion generation.
    pub ollama_model: String,
    /// Timeout for the inference call; generous because inference latency
    /// varies far more than ordinary API traffic.
    pub suggest_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".into()),
            github_api_base: std::env::var("GITHUB_API_BASE")
                .unwrap_or_else(|_| "https://api.github.com".into()),
            default_token: std::env::var("GITHUB_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            // Prefer explicit OLLAMA_URL, fallback to localhost:OLLAMA_PORT
            ollama_endpoint: std::env::var("OLLAMA_URL").unwrap_or_else(|_| {
                let port = std::env::var("OLLAMA_PORT").unwrap_or_else(|_| "11434".into());
                format!("http://localhost:{port}")
            }),
            ollama_model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3".into()),
            suggest_timeout_secs: std::env::var("SUGGEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

/// Shared state for all HTTP handlers.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    /// Builds a per-request gateway from the caller's token (or the
    /// configured fallback).
    pub(crate) fn gateway(&self, headers: &HeaderMap) -> AppResult<GitHubGateway> {
        let token = bearer_token(headers, &self.config)?;

        Ok(GitHubGateway::from_config(GatewayConfig {
            base_api: self.config.github_api_base.clone(),
            token,
        })?)
    }
}
