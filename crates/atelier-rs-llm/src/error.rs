//! Error types for completion calls.

use thiserror::Error;

/// Errors returned by completion providers.
///
/// Provider-reported API errors are kept distinct from transport and decode
/// failures so operators can tell quota/auth problems from network ones; both
/// surface to callers identically.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No provider credential was configured at startup.
    #[error("completion provider is not configured")]
    NotConfigured,
    /// The provider answered with a non-success status.
    #[error("provider API error {status}: {message}")]
    Api { status: u16, message: String },
    /// Transport-level failure (connect, timeout, body read).
    #[error("provider transport error: {0}")]
    Http(#[from] reqwest::Error),
    /// The provider response did not contain a usable completion.
    #[error("malformed provider response: {0}")]
    Malformed(String),
}
