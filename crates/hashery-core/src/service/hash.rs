//! ContentHasher trait for computing content digests.
//!
//! Defined in hashery-core so services can hash content without coupling to
//! a specific hashing algorithm. The `Sha256ContentHasher` adapter lives in
//! hashery-infra.

/// Incremental digest state: accepts chunks, then finalizes exactly once.
pub trait DigestAccumulator: Send {
    /// Feed the next chunk of input.
    fn update(&mut self, chunk: &[u8]);

    /// Consume the accumulator and return the lowercase hex digest.
    fn finalize_hex(self) -> String;
}

/// Abstraction over content hashing.
pub trait ContentHasher: Send + Sync {
    type Accumulator: DigestAccumulator;

    /// Start a fresh incremental digest.
    fn accumulator(&self) -> Self::Accumulator;

    /// Compute a hex-encoded hash of the given content in one pass.
    fn compute_hash(&self, content: &str) -> String {
        let mut acc = self.accumulator();
        acc.update(content.as_bytes());
        acc.finalize_hex()
    }
}
