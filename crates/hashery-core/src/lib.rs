//! Hashing service and hasher trait definitions for Hashery.
//!
//! This crate defines the "ports" (hasher traits) that the infrastructure
//! layer implements, plus the `HashService` that composes them. It depends
//! only on `hashery-types` -- never on `hashery-infra` or a crypto crate.

pub mod service;
pub mod stream;
