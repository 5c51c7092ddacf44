//! Shared request-handler state.

use atelier_rs_config::AtelierConfig;
use atelier_rs_core::Stylist;
use atelier_rs_llm::{CompletionProvider, OpenAiOptions, OpenAiProvider};
use atelier_rs_memory::{HttpMemoryStore, MemoryStore};
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

/// Immutable state built once at startup and injected into every handler.
pub struct AppState {
    pub stylist: Stylist,
    pub memory: Arc<dyn MemoryStore>,
}

impl AppState {
    /// Assemble state from explicit parts. Used by tests to inject stubs.
    pub fn new(stylist: Stylist, memory: Arc<dyn MemoryStore>) -> Self {
        Self { stylist, memory }
    }

    /// Build real clients from config. A missing provider key is not fatal:
    /// the service starts and completion requests answer "not configured".
    pub fn from_config(config: &AtelierConfig) -> anyhow::Result<Self> {
        let memory: Arc<dyn MemoryStore> = Arc::new(HttpMemoryStore::new(
            config.memory.base_url.as_str(),
            Duration::from_secs(config.memory.timeout_secs),
        )?);

        let completion: Option<Arc<dyn CompletionProvider>> = if config.completions_enabled() {
            let api_key = config
                .completion
                .api_key
                .clone()
                .unwrap_or_default();
            let provider = OpenAiProvider::new(OpenAiOptions {
                api_key,
                base_url: config.completion.base_url.clone(),
                model: config.completion.model.clone(),
                temperature: config.completion.temperature,
                max_tokens: config.completion.max_tokens,
                timeout: Duration::from_secs(config.completion.timeout_secs),
            })?;
            info!(
                "completion provider configured (model={})",
                config.completion.model
            );
            Some(Arc::new(provider))
        } else {
            warn!("starting without a completion provider; /generate-outfit will answer 503");
            None
        };

        let stylist = Stylist::new(
            completion,
            memory.clone(),
            config.identity.clone(),
            config.memory.recall_limit,
        );
        Ok(Self { stylist, memory })
    }
}
