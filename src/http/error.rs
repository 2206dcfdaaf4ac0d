//! HTTP error handling and response types.
//!
//! Every failure maps to a JSON body of the form `{"error": "<message>"}`.
//! Internal causes are logged, never returned to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (missing required fields)
    BadRequest(String),
    /// Export token mismatch
    Forbidden(String),
    /// Resource not found
    NotFound(String),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorBody::new(msg)),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::new(msg)),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error"),
                )
            }
            AppError::Repository(e) => match e {
                RepositoryError::ValidationError { ref message, .. } => {
                    (StatusCode::BAD_REQUEST, ErrorBody::new(message.clone()))
                }
                RepositoryError::NotFound { ref message, .. } => {
                    (StatusCode::NOT_FOUND, ErrorBody::new(message.clone()))
                }
                other => {
                    // Connection, query and internal failures share one
                    // caller-facing message; detail goes to the log.
                    tracing::error!("Repository error: {}", other);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorBody::new("Internal server error"),
                    )
                }
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
