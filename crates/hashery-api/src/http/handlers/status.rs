//! Liveness endpoints.

use axum::Json;

use hashery_types::hash::{HealthResponse, StatusResponse};

/// GET / - Fixed "service is running" payload.
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse::running())
}

/// GET /health - Simple health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok(env!("CARGO_PKG_VERSION")))
}
