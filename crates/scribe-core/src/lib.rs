//! # Scribe Core
//!
//! The domain layer of the Scribe API.
//! This crate contains entities, ports and the resource services, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod fakes;

pub use error::{DomainError, RepoError};
