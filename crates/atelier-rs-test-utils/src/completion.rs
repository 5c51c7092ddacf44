use async_trait::async_trait;
use atelier_rs_llm::{CompletionError, CompletionProvider};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FixedCompletion {
    response: String,
}

impl FixedCompletion {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl CompletionProvider for FixedCompletion {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, CompletionError> {
        Ok(self.response.clone())
    }
}

#[derive(Debug, Clone)]
pub struct FailingCompletion {
    message: String,
}

impl FailingCompletion {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl CompletionProvider for FailingCompletion {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, CompletionError> {
        Err(CompletionError::Api {
            status: 429,
            message: self.message.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct RecordingCompletion {
    response: String,
    pub last_prompt: Arc<Mutex<Option<(String, String)>>>,
}

impl RecordingCompletion {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl CompletionProvider for RecordingCompletion {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        *self.last_prompt.lock() = Some((system.to_string(), user.to_string()));
        Ok(self.response.clone())
    }
}
