//! Error types for config loading and validation.

use thiserror::Error;

/// Errors returned while loading or validating config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A specific environment variable failed to parse.
    #[error("invalid config at {path}: {message}")]
    InvalidField { path: String, message: String },
    /// Generic validation failure.
    #[error("invalid config: {0}")]
    Invalid(String),
}
