//! Error types for memory-service operations.

/// Errors returned by memory store calls.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("memory transport error: {0}")]
    Http(#[from] reqwest::Error),
    /// The memory service answered with a non-success status.
    #[error("memory service returned {status}: {detail}")]
    Status { status: u16, detail: String },
    /// Response body could not be decoded.
    #[error("memory decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
