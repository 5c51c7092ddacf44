//! Environment-variable config loading.

use crate::{AtelierConfig, ConfigError};
use log::{debug, warn};

/// Provider API key.
const ENV_API_KEY: &str = "OPENAI_API_KEY";
/// Completion model override.
const ENV_MODEL: &str = "ATELIER_MODEL";
/// Completion endpoint base URL override.
const ENV_COMPLETION_BASE_URL: &str = "ATELIER_COMPLETION_BASE_URL";
/// Memory service base URL override.
const ENV_MEMORY_BASE_URL: &str = "MEMORY_BASE_URL";
/// Context retrieval result cap override.
const ENV_RECALL_LIMIT: &str = "ATELIER_RECALL_LIMIT";
/// HTTP bind address override.
const ENV_BIND_ADDR: &str = "ATELIER_BIND_ADDR";

impl AtelierConfig {
    /// Load config from process environment variables, applying defaults for
    /// everything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Load config through an injectable variable lookup.
    pub fn from_env_with(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = AtelierConfig::default();

        if let Some(key) = lookup(ENV_API_KEY) {
            config.completion.api_key = Some(key);
        }
        if let Some(model) = non_blank(lookup(ENV_MODEL)) {
            config.completion.model = model;
        }
        if let Some(base_url) = non_blank(lookup(ENV_COMPLETION_BASE_URL)) {
            config.completion.base_url = trim_trailing_slash(&base_url);
        }
        if let Some(base_url) = non_blank(lookup(ENV_MEMORY_BASE_URL)) {
            config.memory.base_url = trim_trailing_slash(&base_url);
        }
        if let Some(raw) = non_blank(lookup(ENV_RECALL_LIMIT)) {
            config.memory.recall_limit =
                raw.parse().map_err(|_| ConfigError::InvalidField {
                    path: ENV_RECALL_LIMIT.to_string(),
                    message: format!("expected an integer, got {raw:?}"),
                })?;
        }
        if let Some(addr) = non_blank(lookup(ENV_BIND_ADDR)) {
            config.server.bind_addr = addr;
        }

        if !config.completions_enabled() {
            warn!("no completion API key configured; outfit generation will report not configured");
        }
        debug!(
            "loaded config from environment (completions_enabled={}, model={}, memory_base={})",
            config.completions_enabled(),
            config.completion.model,
            config.memory.base_url
        );
        Ok(config)
    }
}

/// Treat unset and blank variables the same.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Base URLs are joined with path fragments; a trailing slash would double up.
fn trim_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use crate::{AtelierConfig, ConfigError};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name| map.get(name).map(|value| value.to_string())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = AtelierConfig::from_env_with(|_| None).expect("load");
        assert!(!config.completions_enabled());
        assert_eq!(config.memory.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.server.bind_addr, "127.0.0.1:8000");
    }

    #[test]
    fn environment_overrides_apply() {
        let vars = [
            ("OPENAI_API_KEY", "sk-test"),
            ("ATELIER_MODEL", "gpt-4.1"),
            ("MEMORY_BASE_URL", "http://memories.internal:8080/"),
            ("ATELIER_RECALL_LIMIT", "3"),
            ("ATELIER_BIND_ADDR", "0.0.0.0:8000"),
        ];
        let config = AtelierConfig::from_env_with(lookup_from(&vars)).expect("load");
        assert!(config.completions_enabled());
        assert_eq!(config.completion.model, "gpt-4.1");
        assert_eq!(config.memory.base_url, "http://memories.internal:8080");
        assert_eq!(config.memory.recall_limit, 3);
        assert_eq!(config.server.bind_addr, "0.0.0.0:8000");
    }

    #[test]
    fn invalid_recall_limit_is_an_error() {
        let vars = [("ATELIER_RECALL_LIMIT", "three")];
        let err = AtelierConfig::from_env_with(lookup_from(&vars)).unwrap_err();
        match err {
            ConfigError::InvalidField { path, .. } => {
                assert_eq!(path, "ATELIER_RECALL_LIMIT");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let vars = [("ATELIER_MODEL", "   ")];
        let config = AtelierConfig::from_env_with(lookup_from(&vars)).expect("load");
        assert_eq!(config.completion.model, "gpt-4.1-mini");
    }
}
