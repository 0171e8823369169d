//! Offline fallbacks and the failure guard around a remote assistant.

use std::sync::Arc;
use async_trait::async_trait;
use tracing::warn;
use wordjar_core::{Settings, WordInfo};
use crate::{AssistConfig, Assistant, ProxyAssistant, Result};

/// Assistant that never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAssistant;

#[async_trait]
impl Assistant for OfflineAssistant {
    async fn word_info(&self, _word: &str) -> Result<Option<WordInfo>> {
        Ok(None)
    }

    async fn spelling_hint(&self, word: &str, _meaning: &str) -> Result<String> {
        let mut chars = word.chars();
        let first = chars.next().unwrap_or_default();
        let last = chars.last().unwrap_or(first);
        Ok(format!("It starts with \"{}\" and ends with \"{}\"", first, last))
    }

    async fn sentence_example(&self, word: &str, _meaning: &str) -> Result<String> {
        Ok(format!("I like the word \"{}\".", word))
    }

    async fn sentence_starter(&self, word: &str, _meaning: &str) -> Result<String> {
        Ok(format!("The {}", word))
    }

    async fn review_sentence(&self, _word: &str, _sentence: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Wraps a remote assistant; any failure is logged and answered by the
/// offline fallback instead. Calls never fail and are never retried.
pub struct GuardedAssistant {
    primary: Option<Arc<dyn Assistant>>,
    fallback: OfflineAssistant,
}

impl GuardedAssistant {
    /// Guard `primary`.
    pub fn new(primary: Arc<dyn Assistant>) -> Self {
        Self { primary: Some(primary), fallback: OfflineAssistant }
    }

    /// Offline only.
    pub fn offline() -> Self {
        Self { primary: None, fallback: OfflineAssistant }
    }

    /// Pick the assistant described by the user's settings.
    pub fn from_settings(settings: &Settings, config: AssistConfig) -> Self {
        if settings.ai_enabled {
            Self::new(Arc::new(ProxyAssistant::new(config, settings.ai_provider)))
        } else {
            Self::offline()
        }
    }

    /// Whether a remote assistant is in use.
    pub fn is_online(&self) -> bool {
        self.primary.is_some()
    }
}

macro_rules! guarded {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {{
        if let Some(primary) = &$self.primary {
            match primary.$method($($arg),*).await {
                Ok(value) => return Ok(value),
                Err(e) => warn!("AI {} failed, using offline fallback: {}", stringify!($method), e),
            }
        }
        $self.fallback.$method($($arg),*).await
    }};
}

#[async_trait]
impl Assistant for GuardedAssistant {
    async fn word_info(&self, word: &str) -> Result<Option<WordInfo>> {
        guarded!(self, word_info(word))
    }

    async fn spelling_hint(&self, word: &str, meaning: &str) -> Result<String> {
        guarded!(self, spelling_hint(word, meaning))
    }

    async fn sentence_example(&self, word: &str, meaning: &str) -> Result<String> {
        guarded!(self, sentence_example(word, meaning))
    }

    async fn sentence_starter(&self, word: &str, meaning: &str) -> Result<String> {
        guarded!(self, sentence_starter(word, meaning))
    }

    async fn review_sentence(&self, word: &str, sentence: &str) -> Result<Option<String>> {
        guarded!(self, review_sentence(word, sentence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AssistError;

    struct Broken;

    #[async_trait]
    impl Assistant for Broken {
        async fn word_info(&self, _word: &str) -> Result<Option<WordInfo>> {
            Err(AssistError::Api("down".into()))
        }
        async fn spelling_hint(&self, _word: &str, _meaning: &str) -> Result<String> {
            Err(AssistError::Api("down".into()))
        }
        async fn sentence_example(&self, _word: &str, _meaning: &str) -> Result<String> {
            Err(AssistError::Api("down".into()))
        }
        async fn sentence_starter(&self, _word: &str, _meaning: &str) -> Result<String> {
            Ok("A big".into())
        }
        async fn review_sentence(&self, _word: &str, _sentence: &str) -> Result<Option<String>> {
            Err(AssistError::Api("down".into()))
        }
    }

    #[tokio::test]
    async fn test_failures_fall_back_offline() {
        let guarded = GuardedAssistant::new(Arc::new(Broken));
        assert_eq!(
            guarded.spelling_hint("apple", "").await.unwrap(),
            "It starts with \"a\" and ends with \"e\""
        );
        assert_eq!(guarded.review_sentence("apple", "I like apples.").await.unwrap(), None);
        assert_eq!(guarded.word_info("apple").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_successes_pass_through() {
        let guarded = GuardedAssistant::new(Arc::new(Broken));
        assert_eq!(guarded.sentence_starter("dog", "").await.unwrap(), "A big");
    }

    #[test]
    fn test_disabled_settings_stay_offline() {
        let settings = Settings { ai_enabled: false, ..Settings::default() };
        assert!(!GuardedAssistant::from_settings(&settings, AssistConfig::default()).is_online());
        assert!(GuardedAssistant::from_settings(&Settings::default(), AssistConfig::default()).is_online());
    }
}
