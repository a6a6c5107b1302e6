//! PasswordHasher trait. The bcrypt adapter lives in hashery-infra.

use hashery_types::error::HashError;

/// Abstraction over salted, deliberately slow password hashing.
///
/// Implementations are CPU-bound and blocking; callers on an async runtime
/// must move them off the reactor threads.
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` with a freshly generated salt.
    fn hash(&self, password: &str) -> Result<String, HashError>;

    /// Check `password` against a previously produced hash string.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
