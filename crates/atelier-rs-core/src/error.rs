//! Error types for the core orchestration crate.

use atelier_rs_llm::CompletionError;
use thiserror::Error;

/// Errors returned by the stylist orchestrator.
///
/// Memory-service failures never appear here; they degrade inside the flow.
#[derive(Debug, Error)]
pub enum StylistError {
    /// A request field failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// No completion provider credential was configured at startup.
    #[error("completion provider is not configured")]
    NotConfigured,
    /// The completion call failed; the request cannot succeed.
    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),
}
