//! Completion provider interface.

use crate::error::CompletionError;
use async_trait::async_trait;

/// Chat-style completion provider abstraction.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one completion over an ordered system + user message pair and
    /// return the generated text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;
}
