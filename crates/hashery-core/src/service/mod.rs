//! Hashing services and the ports they depend on.
//!
//! Services depend on traits -- never on concrete hashing implementations.

pub mod hash;
pub mod hashing;
pub mod password;
