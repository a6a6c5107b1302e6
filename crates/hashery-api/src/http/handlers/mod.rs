//! HTTP request handlers for the REST API.

pub mod hash;
pub mod status;
