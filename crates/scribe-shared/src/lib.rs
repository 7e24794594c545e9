//! # Scribe Shared
//!
//! Wire types for the Scribe API: request bodies with their validation
//! schemas, response bodies and the uniform error body.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, MessageResponse};
