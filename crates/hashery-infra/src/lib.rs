//! Infrastructure layer for Hashery.
//!
//! Contains implementations of the hasher traits defined in `hashery-core`
//! (SHA-256 content hashing, bcrypt password hashing) and the config file
//! loader.

pub mod config;
pub mod crypto;
