//! Application error type mapping to HTTP status codes and the
//! `{"detail": ...}` body.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use hashery_types::error::HashError;
use hashery_types::hash::ErrorResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Any failure inside a hashing operation. Always a 500.
    Hash(HashError),
    /// Request rejected before reaching the hashing service.
    Validation { status: StatusCode, message: String },
}

impl AppError {
    pub fn validation(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Validation {
            status,
            message: message.into(),
        }
    }
}

impl From<HashError> for AppError {
    fn from(e: HashError) -> Self {
        AppError::Hash(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::validation(e.status(), e.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(e: MultipartRejection) -> Self {
        AppError::validation(e.status(), e.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::validation(e.status(), e.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Hash(e) => {
                tracing::error!(error = %e, "hashing operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Validation { status, message } => {
                tracing::debug!(%status, %message, "request rejected");
                (status, message)
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
