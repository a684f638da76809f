//! Authenticated gateway to the GitHub REST v3 API.
//!
//! The crate exposes a single [`GitHubGateway`] built from a
//! [`GatewayConfig`]. All operations funnel through one generic JSON caller
//! (`client`), so header handling and error translation are uniform:
//! upstream statuses are preserved verbatim, transport failures are wrapped,
//! and nothing is retried. Each gateway instance is cheap and stateless;
//! the HTTP layer constructs one per request with the caller's token.

mod client;
pub mod errors;
mod ops;
mod pr_builder;
pub mod types;

pub use errors::{GatewayError, GatewayResult};

use client::GitHubClient;
use tracing::debug;

/// Runtime configuration for the gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// API base, e.g. "https://api.github.com".
    pub base_api: String,
    /// Access token (PAT) sent as `Authorization: token <PAT>`.
    pub token: String,
}

/// Entry point for all GitHub interactions in the service.
#[derive(Debug, Clone)]
pub struct GitHubGateway {
    pub(crate) client: GitHubClient,
}

impl GitHubGateway {
    /// Constructs a gateway from generic configuration.
    ///
    /// The underlying HTTP client carries a stable user agent so that the
    /// upstream host can identify the integration.
    pub fn from_config(cfg: GatewayConfig) -> GatewayResult<Self> {
        debug!("Initializing gateway: base_api={}", cfg.base_api);

        let http = reqwest::Client::builder()
            .user_agent("gh-bridge-backend/0.1")
            .build()?;

        Ok(Self {
            client: GitHubClient::new(http, cfg.base_api, cfg.token),
        })
    }
}
