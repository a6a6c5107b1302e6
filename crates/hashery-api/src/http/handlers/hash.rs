//! Hashing endpoint handlers.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use futures_util::TryStreamExt;
use tokio_util::io::StreamReader;

use hashery_types::hash::{ContentRequest, HashResponse, PasswordRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::ValidatedJson;
use crate::state::AppState;

/// Multipart field carrying the upload.
const FILE_FIELD: &str = "file";

/// POST /hash/password - bcrypt hash with a fresh salt.
pub async fn hash_password(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PasswordRequest>,
) -> Result<Json<HashResponse>, AppError> {
    let resp = state.hash_service.password_hash(req.password).await?;
    Ok(Json(resp))
}

/// POST /hash/content - SHA-256 of the string's UTF-8 bytes.
pub async fn hash_content(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ContentRequest>,
) -> Result<Json<HashResponse>, AppError> {
    let resp = state.hash_service.content_hash(&req.content)?;
    Ok(Json(resp))
}

/// POST /hash/file - SHA-256 of a multipart upload, streamed.
///
/// Fields other than `file` are skipped without being buffered.
pub async fn hash_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<HashResponse>, AppError> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        tracing::debug!(filename = ?field.file_name(), "hashing uploaded file");
        let body = Box::pin(field.map_err(std::io::Error::other));
        let resp = state.hash_service.file_hash(StreamReader::new(body)).await?;
        return Ok(Json(resp));
    }

    Err(AppError::validation(
        StatusCode::UNPROCESSABLE_ENTITY,
        format!("missing multipart field '{FILE_FIELD}'"),
    ))
}
