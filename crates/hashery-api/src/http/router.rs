//! Axum router configuration with middleware.
//!
//! Middleware: CORS for the configured frontend origins, request tracing.
//! The file route lifts the default body limit so uploads of any size
//! stream through.

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use hashery_types::config::CorsConfig;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let cors = build_cors(&state.config.cors)?;

    let hash_routes = Router::new()
        .route("/password", post(handlers::hash::hash_password))
        .route("/content", post(handlers::hash::hash_content))
        .route(
            "/file",
            post(handlers::hash::hash_file).layer(DefaultBodyLimit::disable()),
        );

    let router = Router::new()
        .route("/", get(handlers::status::root))
        .route("/health", get(handlers::status::health_check))
        .nest("/hash", hash_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

/// CORS layer for the configured origins.
///
/// Methods and headers are mirrored from the request: wildcards are not
/// allowed together with credentials.
fn build_cors(config: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| anyhow::anyhow!("invalid CORS origin '{origin}': {e}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials))
}
