//! Cryptographic primitives for Hashery.
//!
//! - `hash`: SHA-256 content and file digests
//! - `password`: bcrypt password hashing

pub mod hash;
pub mod password;
