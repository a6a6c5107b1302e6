//! Application state wiring the hashing service to its concrete hashers.
//!
//! `HashService` is generic over hasher traits; AppState pins it to the
//! infra implementations.

use std::sync::Arc;

use hashery_core::service::hashing::HashService;
use hashery_infra::crypto::hash::Sha256ContentHasher;
use hashery_infra::crypto::password::BcryptPasswordHasher;
use hashery_types::config::ServiceConfig;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteHashService = HashService<BcryptPasswordHasher, Sha256ContentHasher>;

/// Shared, immutable application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub hash_service: Arc<ConcreteHashService>,
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Wire the service from the startup configuration.
    pub fn new(config: ServiceConfig) -> anyhow::Result<Self> {
        let password_hasher = BcryptPasswordHasher::new(config.password.cost)?;
        let hash_service = HashService::new(password_hasher, Sha256ContentHasher::new());

        Ok(Self {
            hash_service: Arc::new(hash_service),
            config: Arc::new(config),
        })
    }
}
