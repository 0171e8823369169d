//! WordJar core data models.
//!
//! This crate defines the vocabulary entries, star records, streak and
//! settings documents shared by every other WordJar crate.

#![warn(missing_docs)]

// Core identities
mod id;

// Vocabulary
mod word;

// Progress bookkeeping
mod stars;
mod stats;
mod streak;

// User preferences
mod settings;

// Re-exports
pub use id::*;

pub use word::{normalize_word, PartOfSpeech, UnknownPartOfSpeech, Word, WordInfo};
pub use stars::{StarCategory, StarRecord, MAX_STARS_PER_CATEGORY, MAX_STARS_PER_WORD};
pub use stats::{rounded_percent, AggregateStats, OverallProgress};
pub use streak::StreakRecord;
pub use settings::{AiProvider, Settings};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;

/// Progress map keyed by word.
pub type ProgressMap = std::collections::BTreeMap<WordId, StarRecord>;
