//! Memory store interface and HTTP implementation.

use crate::error::MemoryError;
use crate::model::{EpisodeRecord, RetrievedEpisode, SearchRequest, SessionIdentity, parse_search_response};
use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use std::time::Duration;

/// Memory store abstraction used by the orchestrator and the HTTP proxy.
#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// Search for episodes related to a query. One attempt, no retries.
    async fn search(
        &self,
        identity: &SessionIdentity,
        query: &str,
        limit: usize,
    ) -> Result<Vec<RetrievedEpisode>, MemoryError>;

    /// Forward a caller-supplied search body and return the raw response.
    async fn search_raw(&self, body: Value) -> Result<Value, MemoryError>;

    /// Ingest one episode. One attempt, no retries.
    async fn log_episode(&self, record: &EpisodeRecord) -> Result<(), MemoryError>;
}

/// HTTP client for a MemMachine-style memory service.
#[derive(Debug, Clone)]
pub struct HttpMemoryStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMemoryStore {
    /// Create a store client for the given base URL with a bounded timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, MemoryError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST a JSON body and return the decoded response, mapping non-success
    /// statuses to `MemoryError::Status`.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, MemoryError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(MemoryError::Status {
                status: status.as_u16(),
                detail: truncate_detail(&detail),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl MemoryStore for HttpMemoryStore {
    async fn search(
        &self,
        identity: &SessionIdentity,
        query: &str,
        limit: usize,
    ) -> Result<Vec<RetrievedEpisode>, MemoryError> {
        let request = SearchRequest {
            session: identity.clone(),
            query: query.to_string(),
            limit,
            filter: None,
        };
        debug!(
            "memory search (session_id={}, query_len={}, limit={})",
            identity.session_id,
            query.len(),
            limit
        );
        let body = serde_json::to_value(&request)?;
        let response = self.post_json("/v1/memories/search", &body).await?;
        let episodes = parse_search_response(&response);
        debug!(
            "memory search returned (session_id={}, episodes={})",
            identity.session_id,
            episodes.len()
        );
        Ok(episodes)
    }

    async fn search_raw(&self, body: Value) -> Result<Value, MemoryError> {
        debug!("memory search passthrough (body_keys={})", body_keys(&body));
        self.post_json("/v1/memories/search", &body).await
    }

    async fn log_episode(&self, record: &EpisodeRecord) -> Result<(), MemoryError> {
        debug!(
            "memory ingest (session_id={}, episode_type={}, content_len={})",
            record.session.session_id,
            record.episode_type,
            record.episode_content.len()
        );
        let body = serde_json::to_value(record)?;
        self.post_json("/v1/memories", &body).await?;
        Ok(())
    }
}

/// Upstream error bodies can be large; keep log and error payloads short.
fn truncate_detail(detail: &str) -> String {
    const MAX_DETAIL_CHARS: usize = 200;
    let trimmed = detail.trim();
    if trimmed.chars().count() <= MAX_DETAIL_CHARS {
        return trimmed.to_string();
    }
    trimmed.chars().take(MAX_DETAIL_CHARS).collect()
}

fn body_keys(body: &Value) -> String {
    match body.as_object() {
        Some(map) => map.keys().cloned().collect::<Vec<_>>().join(","),
        None => "non-object".to_string(),
    }
}
