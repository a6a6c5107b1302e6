//! Request extractors that reject malformed input before it reaches the
//! hashing service.

pub mod json;
