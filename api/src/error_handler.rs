use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use github_gateway::GatewayError;
use thiserror::Error;

use crate::core::http::response_envelope::ApiResponse;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed caller token.
    #[error("{0}")]
    Auth(String),

    /// Request could not be understood.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Http { status, .. } => *status,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Auth(_) => "UNAUTHORIZED",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Http { code, .. } => code,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.to_string();

        ApiResponse::<()>::error(code, message, Vec::new()).into_response_with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// The single gateway-to-HTTP error translation, shared by every route.
///
/// Upstream statuses pass through unchanged (a 404 stays a 404, a 422
/// stays a 422); transport failures surface as a generic server error.
impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Upstream { status, message } => AppError::Http {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                code: "UPSTREAM_ERROR",
                message,
            },
            GatewayError::Transport(e) => AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "UPSTREAM_UNREACHABLE",
                message: format!("transport failure talking to GitHub: {e}"),
            },
            GatewayError::InvalidResponse(message) => AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "BAD_UPSTREAM_RESPONSE",
                message,
            },
        }
    }
}
