//! SHA-256 content hashing.
//!
//! Implements the `ContentHasher` trait from `hashery-core` using the
//! `sha2` crate (RustCrypto ecosystem).

use sha2::{Digest, Sha256};

use hashery_core::service::hash::{ContentHasher, DigestAccumulator};

/// SHA-256 implementation of `ContentHasher`.
///
/// Computes lowercase hex-encoded SHA-256 digests, either in one pass or
/// incrementally through [`Sha256Accumulator`].
#[derive(Debug, Clone, Copy)]
pub struct Sha256ContentHasher;

impl Sha256ContentHasher {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256ContentHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Running SHA-256 state.
pub struct Sha256Accumulator(Sha256);

impl DigestAccumulator for Sha256Accumulator {
    fn update(&mut self, chunk: &[u8]) {
        self.0.update(chunk);
    }

    fn finalize_hex(self) -> String {
        format!("{:x}", self.0.finalize())
    }
}

impl ContentHasher for Sha256ContentHasher {
    type Accumulator = Sha256Accumulator;

    fn accumulator(&self) -> Sha256Accumulator {
        Sha256Accumulator(Sha256::new())
    }

    fn compute_hash(&self, content: &str) -> String {
        let digest = Sha256::digest(content.as_bytes());
        format!("{:x}", digest)
    }
}
