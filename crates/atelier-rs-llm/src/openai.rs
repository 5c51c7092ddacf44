//! OpenAI-compatible chat completion client.

use crate::error::CompletionError;
use crate::provider::CompletionProvider;
use async_trait::async_trait;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Construction options for `OpenAiProvider`.
#[derive(Debug, Clone)]
pub struct OpenAiOptions {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

/// Chat-completions client for an OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiProvider {
    /// Build a provider client with a bounded request timeout.
    pub fn new(options: OpenAiOptions) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()?;
        Ok(Self {
            client,
            api_key: options.api_key,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            model: options.model,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };
        debug!(
            "completion call (model={}, system_len={}, user_len={})",
            self.model,
            system.len(),
            user.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(
                "provider API error (status={}, body_len={})",
                status.as_u16(),
                message.len()
            );
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: truncate_message(&message),
            });
        }

        let body: ChatResponse = response.json().await?;
        extract_completion(body)
    }
}

/// Pull the first choice's trimmed text out of a decoded response.
fn extract_completion(body: ChatResponse) -> Result<String, CompletionError> {
    let choice = body
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::Malformed("no choices in response".to_string()))?;
    let content = choice
        .message
        .content
        .ok_or_else(|| CompletionError::Malformed("choice has no content".to_string()))?;
    let content = content.trim().to_string();
    if content.is_empty() {
        return Err(CompletionError::Malformed(
            "choice content is empty".to_string(),
        ));
    }
    Ok(content)
}

/// Upstream error bodies can be large; keep the surfaced message short.
fn truncate_message(message: &str) -> String {
    const MAX_MESSAGE_CHARS: usize = 200;
    let trimmed = message.trim();
    if trimmed.chars().count() <= MAX_MESSAGE_CHARS {
        return trimmed.to_string();
    }
    trimmed.chars().take(MAX_MESSAGE_CHARS).collect()
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
