use async_trait::async_trait;
use atelier_rs_memory::{
    EpisodeRecord, MemoryError, MemoryStore, RetrievedEpisode, SessionIdentity,
};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct StubMemoryStore {
    episodes: Vec<RetrievedEpisode>,
}

impl StubMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_episodes(episodes: Vec<RetrievedEpisode>) -> Self {
        Self { episodes }
    }
}

#[async_trait]
impl MemoryStore for StubMemoryStore {
    async fn search(
        &self,
        _identity: &SessionIdentity,
        _query: &str,
        _limit: usize,
    ) -> Result<Vec<RetrievedEpisode>, MemoryError> {
        Ok(self.episodes.clone())
    }

    async fn search_raw(&self, _body: Value) -> Result<Value, MemoryError> {
        Ok(json!({"content": {"episodic_memory": []}}))
    }

    async fn log_episode(&self, _record: &EpisodeRecord) -> Result<(), MemoryError> {
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FailingMemoryStore;

impl FailingMemoryStore {
    pub fn new() -> Self {
        Self
    }

    fn error() -> MemoryError {
        MemoryError::Status {
            status: 503,
            detail: "memory service unavailable".to_string(),
        }
    }
}

#[async_trait]
impl MemoryStore for FailingMemoryStore {
    async fn search(
        &self,
        _identity: &SessionIdentity,
        _query: &str,
        _limit: usize,
    ) -> Result<Vec<RetrievedEpisode>, MemoryError> {
        Err(Self::error())
    }

    async fn search_raw(&self, _body: Value) -> Result<Value, MemoryError> {
        Err(Self::error())
    }

    async fn log_episode(&self, _record: &EpisodeRecord) -> Result<(), MemoryError> {
        Err(Self::error())
    }
}

#[derive(Clone, Default)]
pub struct RecordingMemoryStore {
    episodes: Vec<RetrievedEpisode>,
    fail_search: bool,
    fail_ingest: bool,
    pub searches: Arc<Mutex<Vec<SessionIdentity>>>,
    pub logged: Arc<Mutex<Vec<EpisodeRecord>>>,
}

impl RecordingMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_episodes(mut self, episodes: Vec<RetrievedEpisode>) -> Self {
        self.episodes = episodes;
        self
    }

    pub fn with_failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    pub fn with_failing_ingest(mut self) -> Self {
        self.fail_ingest = true;
        self
    }
}

#[async_trait]
impl MemoryStore for RecordingMemoryStore {
    async fn search(
        &self,
        identity: &SessionIdentity,
        _query: &str,
        _limit: usize,
    ) -> Result<Vec<RetrievedEpisode>, MemoryError> {
        self.searches.lock().push(identity.clone());
        if self.fail_search {
            return Err(MemoryError::Status {
                status: 503,
                detail: "search unavailable".to_string(),
            });
        }
        Ok(self.episodes.clone())
    }

    async fn search_raw(&self, body: Value) -> Result<Value, MemoryError> {
        Ok(body)
    }

    async fn log_episode(&self, record: &EpisodeRecord) -> Result<(), MemoryError> {
        if self.fail_ingest {
            return Err(MemoryError::Status {
                status: 503,
                detail: "ingest unavailable".to_string(),
            });
        }
        self.logged.lock().push(record.clone());
        Ok(())
    }
}
