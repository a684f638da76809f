//! Authorization header handling.
//!
//! The contract is `Authorization: token <value>`: the literal prefix is
//! stripped before use. A missing header falls back to the configured
//! default token; only when neither is present does the request fail.

use axum::http::{HeaderMap, header};

use crate::core::app_state::Config;
use crate::error_handler::{AppError, AppResult};

const TOKEN_PREFIX: &str = "token ";

/// Resolves the GitHub token for one request.
pub(crate) fn bearer_token(headers: &HeaderMap, config: &Config) -> AppResult<String> {
    match headers.get(header::AUTHORIZATION) {
        Some(value) => {
            let raw = value
                .to_str()
                .map_err(|_| AppError::Auth("authorization header is not valid text".into()))?;

            match raw.strip_prefix(TOKEN_PREFIX) {
                Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
                _ => Err(AppError::Auth(
                    "authorization header must be of the form 'token <value>'".into(),
                )),
            }
        }
        None => config.default_token.clone().ok_or_else(|| {
            AppError::Auth("no authorization header and no default token configured".into())
        }),
    }
}
