//! JSON body extractor with `{"detail": ...}` rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::http::error::AppError;

/// Like [`Json`], but rejections are rendered as [`AppError`].
///
/// Keeps the framework's status code (400 malformed, 415 wrong content
/// type, 422 missing or mistyped fields).
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
