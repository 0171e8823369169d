//! Effects emitted by game transitions.
//!
//! Games never touch storage or the network directly. Each transition
//! returns the effects it wants; [`EffectApplier`] runs the store-bound
//! ones and hands the rest back to the front-end.

use std::sync::Arc;
use tracing::{debug, warn};
use wordjar_ai::{Assistant, Ticket};
use wordjar_core::{PartOfSpeech, StarCategory, WordId};
use wordjar_progress::ProgressTracker;
use wordjar_storage::Storage;
use wordjar_words::WordStore;
use crate::Result;

/// Kind of assistant help being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    /// Hint for spelling the word
    Spelling,
    /// Full example sentence
    Example,
    /// Sentence opening to finish
    Starter,
}

/// Something a transition asks the outside world to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Award one star
    AwardStar {
        /// Word earning the star
        word_id: WordId,
        /// Category of the star
        category: StarCategory,
    },

    /// Persist a guessed part of speech
    Retag {
        /// Word to tag
        word_id: WordId,
        /// Guessed tag
        pos: PartOfSpeech,
    },

    /// Show the celebration
    Celebrate,

    /// Read text aloud
    Speak {
        /// Text to speak
        text: String,
    },

    /// Ask the assistant for help with the current question
    RequestHint {
        /// Ticket to hand back with the reply
        ticket: Ticket,
        /// Word in question
        word: String,
        /// Its meaning
        meaning: String,
        /// Help wanted
        kind: HintKind,
    },

    /// Ask the assistant to comment on an accepted sentence
    RequestReview {
        /// Ticket to hand back with the reply
        ticket: Ticket,
        /// Word in question
        word: String,
        /// The learner's sentence
        sentence: String,
    },
}

impl Effect {
    /// Whether [`EffectApplier`] handles this effect.
    pub fn is_store_bound(&self) -> bool {
        matches!(self, Effect::AwardStar { .. } | Effect::Retag { .. })
    }

    /// Ticket of an assistant request.
    pub fn ticket(&self) -> Option<Ticket> {
        match self {
            Effect::RequestHint { ticket, .. } | Effect::RequestReview { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }

    /// Run an assistant request. Returns `None` for other effects, when
    /// the assistant has nothing to say, or when it fails.
    pub async fn ask(&self, assistant: &dyn Assistant) -> Option<String> {
        let reply = match self {
            Effect::RequestHint { word, meaning, kind, .. } => match kind {
                HintKind::Spelling => assistant.spelling_hint(word, meaning).await.map(Some),
                HintKind::Example => assistant.sentence_example(word, meaning).await.map(Some),
                HintKind::Starter => assistant.sentence_starter(word, meaning).await.map(Some),
            },
            Effect::RequestReview { word, sentence, .. } => {
                assistant.review_sentence(word, sentence).await
            }
            _ => return None,
        };
        reply.unwrap_or_else(|e| {
            warn!("Assist request failed: {}", e);
            None
        })
    }
}

/// Runs store-bound effects.
pub struct EffectApplier<S: Storage + ?Sized> {
    progress: Arc<dyn ProgressTracker>,
    words: WordStore<S>,
}

impl<S: Storage + ?Sized> EffectApplier<S> {
    /// Create an applier over the given stores.
    pub fn new(progress: Arc<dyn ProgressTracker>, words: WordStore<S>) -> Self {
        Self { progress, words }
    }

    /// Apply every store-bound effect in order and return the others.
    pub async fn apply(&self, effects: Vec<Effect>) -> Result<Vec<Effect>> {
        let mut rest = Vec::new();
        for effect in effects {
            match effect {
                Effect::AwardStar { word_id, category } => {
                    let awarded = self.progress.add_star(word_id, category).await?;
                    debug!("Star for {} in {}: {}", word_id, category, awarded);
                }
                Effect::Retag { word_id, pos } => {
                    self.words.set_pos(word_id, pos).await?;
                    debug!("Tagged {} as {}", word_id, pos);
                }
                other => rest.push(other),
            }
        }
        Ok(rest)
    }
}
