//! The request orchestrator.

use crate::error::StylistError;
use crate::prompt::compose;
use crate::request::{OutfitRequest, OutfitResult};
use atelier_rs_config::IdentityConfig;
use atelier_rs_llm::CompletionProvider;
use atelier_rs_memory::{
    EpisodeRecord, MemoryStore, RecallOutcome, SessionIdentity, recall_context,
};
use log::{debug, info, warn};
use serde_json::json;
use std::sync::Arc;

/// Episode-type tag attached to every ingested recommendation.
const EPISODE_TYPE: &str = "outfit_recommendation";

/// Runs the linear validate → recall → compose → complete → log flow.
///
/// Built once at startup from immutable config and injected into every
/// request handler; holds no per-request state.
#[derive(Clone)]
pub struct Stylist {
    completion: Option<Arc<dyn CompletionProvider>>,
    memory: Arc<dyn MemoryStore>,
    identity: IdentityConfig,
    recall_limit: usize,
}

impl Stylist {
    /// Create a stylist. `completion` is `None` when no provider credential
    /// was configured; requests then fail with `NotConfigured`.
    pub fn new(
        completion: Option<Arc<dyn CompletionProvider>>,
        memory: Arc<dyn MemoryStore>,
        identity: IdentityConfig,
        recall_limit: usize,
    ) -> Self {
        Self {
            completion,
            memory,
            identity,
            recall_limit,
        }
    }

    /// Produce an outfit recommendation for one request.
    ///
    /// Only the completion step is fatal; both memory calls degrade
    /// gracefully. The same session identity is used for the retrieval and
    /// the ingest call so the store can link them.
    pub async fn recommend(&self, request: OutfitRequest) -> Result<OutfitResult, StylistError> {
        let request = request.validated()?;
        let Some(completion) = self.completion.as_ref() else {
            return Err(StylistError::NotConfigured);
        };

        let session = self.session_for(&request);
        let query = request.scenario_line();
        let recall = recall_context(
            self.memory.as_ref(),
            &session,
            &query,
            self.recall_limit,
        )
        .await;
        match &recall {
            RecallOutcome::Failed(reason) => warn!(
                "context retrieval failed, continuing without context (session_id={}, reason={reason})",
                session.session_id
            ),
            RecallOutcome::Empty => debug!(
                "no prior context (session_id={})",
                session.session_id
            ),
            RecallOutcome::Context(text) => debug!(
                "retrieved context (session_id={}, context_len={})",
                session.session_id,
                text.len()
            ),
        }

        let prompt = compose(recall.context_text(), &request);
        let outfit = completion.complete(&prompt.system, &prompt.user).await?;

        let record = episode_for(&session, &request, &outfit);
        if let Err(err) = self.memory.log_episode(&record).await {
            warn!(
                "episode ingest failed, recommendation unaffected (session_id={}, error={err})",
                session.session_id
            );
        }

        info!(
            "outfit recommended (session_id={}, outfit_len={})",
            session.session_id,
            outfit.len()
        );
        Ok(OutfitResult { outfit })
    }

    /// Mint the per-request session identity, honoring a caller-supplied
    /// user id.
    fn session_for(&self, request: &OutfitRequest) -> SessionIdentity {
        let user_id = match &request.user_id {
            Some(user_id) => vec![user_id.clone()],
            None => self.identity.user_id.clone(),
        };
        SessionIdentity::new(
            self.identity.group_id.clone(),
            self.identity.agent_id.clone(),
            user_id,
        )
    }
}

/// Build the episode payload pairing a request with its generated outfit.
fn episode_for(
    session: &SessionIdentity,
    request: &OutfitRequest,
    outfit: &str,
) -> EpisodeRecord {
    let producer = session.agent_id.first().cloned().unwrap_or_default();
    let produced_for = session.user_id.first().cloned().unwrap_or_default();
    EpisodeRecord {
        session: session.clone(),
        producer,
        produced_for,
        episode_content: format!(
            "Outfit request (event: {}, weather: {}, mood: {}). Recommended outfit: {outfit}",
            request.event, request.weather, request.mood
        ),
        episode_type: EPISODE_TYPE.to_string(),
        metadata: json!({
            "event": request.event,
            "weather": request.weather,
            "mood": request.mood,
            "context": request.context,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::episode_for;
    use crate::request::OutfitRequest;
    use atelier_rs_memory::SessionIdentity;
    use pretty_assertions::assert_eq;

    #[test]
    fn episode_pairs_request_with_outfit() {
        let session = SessionIdentity::new(
            "fashion-group-01".to_string(),
            vec!["fashion-stylist".to_string()],
            vec!["profile_user_001".to_string()],
        );
        let request = OutfitRequest {
            event: "dinner with friends".to_string(),
            weather: "70°F".to_string(),
            mood: "confident".to_string(),
            context: None,
            user_id: None,
        };
        let record = episode_for(&session, &request, "a silk blouse");
        assert_eq!(record.producer, "fashion-stylist");
        assert_eq!(record.produced_for, "profile_user_001");
        assert_eq!(record.episode_type, "outfit_recommendation");
        for piece in ["dinner with friends", "70°F", "confident", "a silk blouse"] {
            assert!(record.episode_content.contains(piece), "missing {piece}");
        }
        assert_eq!(record.metadata["mood"], "confident");
    }
}
