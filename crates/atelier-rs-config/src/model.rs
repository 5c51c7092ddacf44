//! Configuration schema for Atelier.

use serde::{Deserialize, Serialize};

/// Root config for the Atelier service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AtelierConfig {
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub memory: MemoryServiceConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl AtelierConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> AtelierConfigBuilder {
        AtelierConfigBuilder::new()
    }

    /// Whether a completion provider credential is present.
    pub fn completions_enabled(&self) -> bool {
        self.completion
            .api_key
            .as_ref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

/// Builder for assembling an `AtelierConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct AtelierConfigBuilder {
    config: AtelierConfig,
}

impl AtelierConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: AtelierConfig::default(),
        }
    }

    /// Replace the completion provider configuration.
    pub fn completion(mut self, completion: CompletionConfig) -> Self {
        self.config.completion = completion;
        self
    }

    /// Replace the memory service configuration.
    pub fn memory(mut self, memory: MemoryServiceConfig) -> Self {
        self.config.memory = memory;
        self
    }

    /// Replace the session identity configuration.
    pub fn identity(mut self, identity: IdentityConfig) -> Self {
        self.config.identity = identity;
        self
    }

    /// Replace the server configuration.
    pub fn server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Finalize and return the built `AtelierConfig`.
    pub fn build(self) -> AtelierConfig {
        self.config
    }
}

/// Completion provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Provider API key. Absent means the service starts without completions.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_completion_base_url")]
    pub base_url: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_completion_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_completion_base_url(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_completion_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_completion_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_temperature() -> f32 {
    0.8
}

fn default_max_tokens() -> u32 {
    400
}

fn default_completion_timeout_secs() -> u64 {
    30
}

/// Memory service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryServiceConfig {
    #[serde(default = "default_memory_base_url")]
    pub base_url: String,
    #[serde(default = "default_memory_timeout_secs")]
    pub timeout_secs: u64,
    /// Result-count cap for context retrieval.
    #[serde(default = "default_recall_limit")]
    pub recall_limit: usize,
}

impl Default for MemoryServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_memory_base_url(),
            timeout_secs: default_memory_timeout_secs(),
            recall_limit: default_recall_limit(),
        }
    }
}

fn default_memory_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_memory_timeout_secs() -> u64 {
    5
}

fn default_recall_limit() -> usize {
    4
}

/// Session identity attached to every memory-service call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_group_id")]
    pub group_id: String,
    #[serde(default = "default_agent_id")]
    pub agent_id: Vec<String>,
    /// Default user ids; callers may override per request.
    #[serde(default = "default_user_id")]
    pub user_id: Vec<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            group_id: default_group_id(),
            agent_id: default_agent_id(),
            user_id: default_user_id(),
        }
    }
}

fn default_group_id() -> String {
    "fashion-group-01".to_string()
}

fn default_agent_id() -> Vec<String> {
    vec!["fashion-stylist".to_string()]
}

fn default_user_id() -> Vec<String> {
    vec!["profile_user_001".to_string()]
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}
