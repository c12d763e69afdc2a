//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use parrot_core::{ChatError, ErrorBody};
use thiserror::Error;
use tracing::{debug, error};

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Generic message for unexpected faults.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Well-formed JSON whose fields have the wrong shape. Answered like a
    /// validation failure, with the parser's complaint as `details`.
    #[error("Validation error: {message}: {details}")]
    InvalidBody { message: String, details: String },

    /// `message` is what the caller sees as `error`; `details` is passed
    /// through as diagnostic text.
    #[error("{message}: {details}")]
    Internal { message: String, details: String },
}

impl AppError {
    pub fn internal(details: impl Into<String>) -> Self {
        AppError::Internal {
            message: INTERNAL_SERVER_ERROR.to_string(),
            details: details.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(message) => ErrorBody {
                error: message,
                details: None,
            },
            AppError::InvalidBody { message, details } => {
                debug!(%details, "rejected request body");
                ErrorBody {
                    error: message,
                    details: Some(details),
                }
            }
            AppError::Internal { message, details } => {
                error!(%message, %details, "request failed");
                ErrorBody {
                    error: message,
                    details: Some(details),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::Validation(msg) => AppError::Validation(msg),
            ChatError::Internal { message, details } => AppError::Internal { message, details },
            // A provider that talks to an upstream service can fail in
            // transport; to our caller that is still our fault.
            other @ (ChatError::Network(_) | ChatError::Server { .. }) => {
                AppError::internal(other.to_string())
            }
        }
    }
}
