//! Request and response payloads for the hashing operations.
//!
//! None of these carry identity beyond a single request/response cycle.

use serde::{Deserialize, Serialize};

/// Body of `POST /hash/password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordRequest {
    pub password: String,
}

/// Body of `POST /hash/content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRequest {
    pub content: String,
}

/// Result of every hashing operation.
///
/// For passwords this is a bcrypt modular-crypt string (`$2b$12$...`),
/// for content and files a 64-character lowercase hex SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResponse {
    pub hash: String,
}

impl HashResponse {
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }
}

/// Payload of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

impl StatusResponse {
    /// The fixed "service is running" payload.
    pub fn running() -> Self {
        Self {
            message: "Hashing Service is running".to_string(),
        }
    }
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok(version: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            version: version.into(),
        }
    }
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
