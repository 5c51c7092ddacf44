//! Wire models for the memory service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Session identity block attached to every memory-service call.
///
/// One identity is minted per inbound request and reused for both the search
/// and the ingest call, so the store can link a query to its episode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionIdentity {
    /// Grouping identifier for the application.
    pub group_id: String,
    /// Agent identifiers producing episodes.
    pub agent_id: Vec<String>,
    /// User identifiers the episodes belong to.
    pub user_id: Vec<String>,
    /// Random per-request session token.
    pub session_id: Uuid,
}

impl SessionIdentity {
    /// Mint an identity with a fresh session id.
    pub fn new(group_id: String, agent_id: Vec<String>, user_id: Vec<String>) -> Self {
        Self {
            group_id,
            agent_id,
            user_id,
            session_id: Uuid::new_v4(),
        }
    }
}

/// Search payload sent to `POST /v1/memories/search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub session: SessionIdentity,
    pub query: String,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
}

/// Episode payload sent to `POST /v1/memories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub session: SessionIdentity,
    /// Identifier of the producing agent.
    pub producer: String,
    /// Identifier of the user the episode was produced for.
    pub produced_for: String,
    pub episode_content: String,
    pub episode_type: String,
    /// Raw request fields echoed for later filtering.
    pub metadata: Value,
}

/// A retrieved memory item. External and read-only to this service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrievedEpisode {
    #[serde(default, alias = "id", alias = "mem_id")]
    pub uuid: Option<String>,
    #[serde(alias = "episode_content")]
    pub content: String,
}

/// Extract retrieved episodes from a raw search response.
///
/// The service nests results under `content.episodic_memory` as an array of
/// arrays where index 1 holds the actual records; older variants return a
/// flat list. Entries that do not decode are skipped rather than failing the
/// whole retrieval.
pub fn parse_search_response(response: &Value) -> Vec<RetrievedEpisode> {
    let Some(episodic) = response
        .get("content")
        .and_then(|content| content.get("episodic_memory"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let records: &[Value] = match episodic.get(1).and_then(Value::as_array) {
        Some(inner) if episodic.iter().all(Value::is_array) => inner,
        _ => episodic,
    };

    records
        .iter()
        .filter_map(|record| serde_json::from_value(record.clone()).ok())
        .filter(|episode: &RetrievedEpisode| !episode.content.trim().is_empty())
        .collect()
}
