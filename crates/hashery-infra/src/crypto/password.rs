//! bcrypt password hashing.
//!
//! Implements the `PasswordHasher` trait from `hashery-core` using the
//! `bcrypt` crate. Output is the modular-crypt string
//! `$2b$<cost>$<22-char salt><31-char digest>`, with a fresh random salt
//! per call.
//!
//! bcrypt only considers the first 72 bytes of a password. Longer inputs
//! are accepted and hashed on that prefix; this is a property of the
//! primitive and is not reported as an error.

use hashery_core::service::password::PasswordHasher;
use hashery_types::error::HashError;

/// Lowest cost the bcrypt primitive accepts.
pub const MIN_COST: u32 = 4;

/// Highest cost the bcrypt primitive accepts.
pub const MAX_COST: u32 = 31;

/// bcrypt implementation of `PasswordHasher`.
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with an explicit cost factor.
    pub fn new(cost: u32) -> Result<Self, HashError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(HashError::PasswordHash(format!(
                "bcrypt cost must be between {MIN_COST} and {MAX_COST}, got {cost}"
            )));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    /// Uses the library default cost.
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, HashError> {
        bcrypt::hash(password, self.cost).map_err(|e| HashError::PasswordHash(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        bcrypt::verify(password, hash).map_err(|e| HashError::PasswordHash(e.to_string()))
    }
}
