//! Assist configuration, read from the environment.

use std::{env, fmt::Display, str::FromStr, time::Duration};
use tracing::{info, warn};

/// Where the AI proxy lives and how to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistConfig {
    /// Base URL of the proxy; requests go to `{proxy_url}/api/<provider>`
    pub proxy_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Model requested from the Claude endpoint (`None` lets the proxy pick)
    pub claude_model: Option<String>,

    /// Model requested from the Gemini endpoint (`None` lets the proxy pick)
    pub gemini_model: Option<String>,

    /// Reply budget for hint-sized requests
    pub max_tokens: u32,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            proxy_url: "http://localhost:3000".to_string(),
            timeout: Duration::from_secs(20),
            claude_model: None,
            gemini_model: None,
            max_tokens: 300,
        }
    }
}

impl AssistConfig {
    /// Load from `WORDJAR_PROXY_URL`, `WORDJAR_AI_TIMEOUT` (seconds),
    /// `WORDJAR_CLAUDE_MODEL`, `WORDJAR_GEMINI_MODEL` and
    /// `WORDJAR_AI_MAX_TOKENS`, keeping defaults for anything unset or
    /// invalid.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            proxy_url: var("WORDJAR_PROXY_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.proxy_url),
            timeout: Duration::from_secs(try_load("WORDJAR_AI_TIMEOUT", defaults.timeout.as_secs())),
            claude_model: var("WORDJAR_CLAUDE_MODEL"),
            gemini_model: var("WORDJAR_GEMINI_MODEL"),
            max_tokens: try_load("WORDJAR_AI_MAX_TOKENS", defaults.max_tokens),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match var(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}");
            info!("{key} falling back to default: {default}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_load_falls_back_on_garbage() {
        env::set_var("WORDJAR_TEST_TRY_LOAD", "soon");
        assert_eq!(try_load("WORDJAR_TEST_TRY_LOAD", 7u64), 7);
        env::set_var("WORDJAR_TEST_TRY_LOAD", " 12 ");
        assert_eq!(try_load("WORDJAR_TEST_TRY_LOAD", 7u64), 12);
        env::remove_var("WORDJAR_TEST_TRY_LOAD");
        assert_eq!(try_load("WORDJAR_TEST_TRY_LOAD", 7u64), 7);
    }

    #[test]
    fn test_defaults() {
        let config = AssistConfig::default();
        assert_eq!(config.proxy_url, "http://localhost:3000");
        assert_eq!(config.max_tokens, 300);
    }
}
