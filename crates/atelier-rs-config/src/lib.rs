//! Configuration schema and environment loading for Atelier.
//!
//! This crate owns the service config schema and the environment-variable
//! loader used by the server binary and tests.

mod env;
mod error;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Configuration schema models.
pub use model::*;
