//! Generic authenticated JSON caller for the GitHub REST v3 API.
//!
//! Every upstream operation in this crate goes through [`GitHubClient::call`]
//! so that headers, body serialization and error translation stay uniform
//! across the whole surface.

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::errors::{GatewayError, GatewayResult};

const ACCEPT_JSON: &str = "application/vnd.github.v3+json";

/// GitHub HTTP client wrapper.
#[derive(Debug, Clone)]
pub(crate) struct GitHubClient {
    http: Client,
    base_api: String, // "https://api.github.com"
    token: String,    // bare PAT, sent as "token <PAT>"
}

impl GitHubClient {
    /// Constructs a GitHub client with a shared HTTP instance and auth token.
    pub(crate) fn new(http: Client, base_api: String, token: String) -> Self {
        debug!("Creating GitHubClient with base_api={}", base_api);
        Self {
            http,
            base_api: base_api.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Performs one authenticated JSON call against a relative API path.
    ///
    /// A 2xx response yields the parsed JSON body, or `Value::Bool(true)`
    /// for successes that carry no body (e.g. ref deletion answering 204).
    /// Any non-2xx response is translated by [`upstream_error`]; transport
    /// failures map to [`GatewayError::Transport`]. No retries at this
    /// layer: the first failure aborts the enclosing operation.
    pub(crate) async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &[(&str, &str)],
    ) -> GatewayResult<Value> {
        let url = format!("{}/{}", self.base_api, path);
        debug!("GitHub call: {} {}", method, url);

        let mut req = self
            .http
            .request(method, &url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", ACCEPT_JSON);

        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(json) = body {
            req = req.json(json);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(upstream_error(status, text));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Bool(true));
        }

        let text = resp.text().await?;
        if text.is_empty() {
            return Ok(Value::Bool(true));
        }

        serde_json::from_str(&text)
            .map_err(|e| GatewayError::InvalidResponse(format!("body is not JSON: {e}")))
    }
}

/// Shared non-2xx translation applied to every upstream call.
///
/// GitHub error bodies carry a structured `"message"` field; when the body
/// is not JSON (HTML error pages, empty bodies) the raw text is kept.
fn upstream_error(status: StatusCode, body: String) -> GatewayError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or(body);

    GatewayError::Upstream {
        status: status.as_u16(),
        message,
    }
}
