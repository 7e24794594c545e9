//! Middleware and extractors.

pub mod auth;
pub mod error;
pub mod security;
pub mod session;
pub mod validate;
