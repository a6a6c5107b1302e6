//! HTTP/REST API layer for Hashery.
//!
//! Axum-based API with `{"detail": ...}` error bodies and CORS for the
//! frontend origins.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
