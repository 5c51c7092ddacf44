//! Fault-tolerant context retrieval.
//!
//! Retrieval failure must never block outfit generation, so the outcome is an
//! explicit enum the orchestrator can branch and log on instead of an error
//! that would propagate.

use crate::client::MemoryStore;
use crate::model::{RetrievedEpisode, SessionIdentity};

/// Per-episode character cap when rendering context.
const MAX_EPISODE_CHARS: usize = 500;
/// Delimiter opening the rendered context block.
const CONTEXT_BEGIN: &str = "--- BEGIN REMEMBERED CONTEXT ---";
/// Delimiter closing the rendered context block.
const CONTEXT_END: &str = "--- END REMEMBERED CONTEXT ---";

/// Result of a context retrieval attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RecallOutcome {
    /// Episodes were found and rendered into a context block.
    Context(String),
    /// The search succeeded but returned nothing.
    Empty,
    /// The search failed; generation proceeds without context.
    Failed(String),
}

impl RecallOutcome {
    /// Context text to interpolate into the prompt; empty when there is none.
    pub fn context_text(&self) -> &str {
        match self {
            RecallOutcome::Context(text) => text,
            RecallOutcome::Empty | RecallOutcome::Failed(_) => "",
        }
    }
}

/// Retrieve prior context for a scenario, degrading to no context on any
/// failure.
pub async fn recall_context(
    store: &dyn MemoryStore,
    identity: &SessionIdentity,
    query: &str,
    limit: usize,
) -> RecallOutcome {
    match store.search(identity, query, limit).await {
        Ok(episodes) if episodes.is_empty() => RecallOutcome::Empty,
        Ok(episodes) => RecallOutcome::Context(format_episodes(&episodes)),
        Err(err) => RecallOutcome::Failed(err.to_string()),
    }
}

/// Render retrieved episodes into a bounded, clearly delimited text block so
/// the model can tell remembered context apart from instructions.
pub fn format_episodes(episodes: &[RetrievedEpisode]) -> String {
    let mut lines = vec![CONTEXT_BEGIN.to_string()];
    for episode in episodes {
        let id = episode.uuid.as_deref().unwrap_or("unknown");
        let content = truncate_chars(episode.content.trim(), MAX_EPISODE_CHARS);
        lines.push(format!("- [{id}] {content}"));
    }
    lines.push(CONTEXT_END.to_string());
    lines.join("\n")
}

/// Truncate a string to a maximum character count.
fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    value.chars().take(max_chars).collect()
}
