//! Crate-wide error hierarchy for github-gateway.

use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Root error type for the github-gateway crate.
///
/// The upstream status code is preserved verbatim so that the HTTP layer
/// can answer the caller with the same status GitHub produced (a 404 stays
/// a 404, a 422 stays a 422).
#[derive(Debug, Error)]
pub enum GatewayError {
    /// GitHub answered with a non-2xx status.
    ///
    /// `message` carries the upstream `"message"` field when the error body
    /// parses as JSON, otherwise the raw response text.
    #[error("github responded {status}: {message}")]
    Upstream {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream error message (structured field or raw body).
        message: String,
    },

    /// Network/transport failure without an HTTP status (DNS, TLS, connect,
    /// reset, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body did not have the expected shape.
    #[error("invalid github response: {0}")]
    InvalidResponse(String),
}
