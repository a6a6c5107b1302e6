//! Shared domain types for Hashery.
//!
//! This crate contains the value types exchanged with the hashing service:
//! request payloads, the hash response, the service error, and the
//! process-wide configuration.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod hash;
