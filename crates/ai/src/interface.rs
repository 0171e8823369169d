//! Assist interfaces.
//!
//! Everything the games and the word store need from dictionaries and
//! language models goes through these traits, so the collaborators can be
//! swapped or stubbed.

use async_trait::async_trait;
use wordjar_core::{PartOfSpeech, WordInfo};

/// Result type for assist calls.
pub type Result<T> = std::result::Result<T, AssistError>;

/// Errors raised by assist collaborators.
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    /// Transport failure talking to the proxy
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The proxy answered with an error body or status
    #[error("AI proxy error: {0}")]
    Api(String),

    /// The reply could not be understood
    #[error("Could not parse AI reply: {0}")]
    Parse(String),

    /// AI assistance is switched off in settings
    #[error("AI assistance is disabled")]
    Disabled,
}

/// Looks up word details.
#[async_trait]
pub trait WordLookup: Send + Sync {
    /// Details for `word`, or `None` when nothing is known.
    async fn lookup(&self, word: &str) -> Result<Option<WordInfo>>;
}

/// Guesses a part of speech without any network access.
pub trait PosGuesser: Send + Sync {
    /// Best guess for `word`, or `None`.
    fn guess_pos(&self, word: &str) -> Option<PartOfSpeech>;
}

/// Hint and review generation for the games.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Meaning, part of speech and example for `word`.
    async fn word_info(&self, word: &str) -> Result<Option<WordInfo>>;

    /// A hint that helps spell `word` without giving it away.
    async fn spelling_hint(&self, word: &str, meaning: &str) -> Result<String>;

    /// A short example sentence using `word`.
    async fn sentence_example(&self, word: &str, meaning: &str) -> Result<String>;

    /// The opening words of a sentence using `word`.
    async fn sentence_starter(&self, word: &str, meaning: &str) -> Result<String>;

    /// Friendly feedback on a learner's sentence, if any.
    async fn review_sentence(&self, word: &str, sentence: &str) -> Result<Option<String>>;
}

/// Any assistant can serve as a word lookup.
pub struct AssistantLookup<A>(pub A);

#[async_trait]
impl<A: Assistant> WordLookup for AssistantLookup<A> {
    async fn lookup(&self, word: &str) -> Result<Option<WordInfo>> {
        self.0.word_info(word).await
    }
}

#[async_trait]
impl<A: Assistant + ?Sized> Assistant for std::sync::Arc<A> {
    async fn word_info(&self, word: &str) -> Result<Option<WordInfo>> {
        (**self).word_info(word).await
    }

    async fn spelling_hint(&self, word: &str, meaning: &str) -> Result<String> {
        (**self).spelling_hint(word, meaning).await
    }

    async fn sentence_example(&self, word: &str, meaning: &str) -> Result<String> {
        (**self).sentence_example(word, meaning).await
    }

    async fn sentence_starter(&self, word: &str, meaning: &str) -> Result<String> {
        (**self).sentence_starter(word, meaning).await
    }

    async fn review_sentence(&self, word: &str, sentence: &str) -> Result<Option<String>> {
        (**self).review_sentence(word, sentence).await
    }
}
