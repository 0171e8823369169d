//! Mini-games
//!
//! Spelling, parts-of-speech, sentence writing and the three-phase
//! challenge. Every game is a plain state machine: transitions return
//! feedback plus a list of [`Effect`]s, and nothing here touches storage
//! or the network. [`EffectApplier`] runs the store-bound effects.

#![warn(missing_docs)]

pub mod error;
pub mod effect;
pub mod turn;
pub mod round;
pub mod qualify;
pub mod spelling;
pub mod pos;
pub mod sentences;
pub mod challenge;

pub use error::{GameError, Result};
pub use effect::{Effect, EffectApplier, HintKind};
pub use turn::Turn;
pub use round::{Attempt, AttemptDetail, Round, Summary, Tier};
pub use qualify::{any_words, tagged_words, MIN_TAGGED_WORDS, MIN_WORDS};
pub use spelling::{letter_marks, Hint, LetterMark, SpellingFeedback, SpellingGame, SpellingMode};
pub use pos::{PosFeedback, PosGame};
pub use sentences::{validate_sentence, SentenceFeedback, SentenceGame, SentenceIssue, MIN_SENTENCE_WORDS};
pub use challenge::{Answer, CategoryScore, ChallengeGame, ChallengeReport, Feedback, Stage, WordResult};
