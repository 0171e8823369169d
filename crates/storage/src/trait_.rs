//! Storage trait abstraction.

use async_trait::async_trait;
use wordjar_core::{ProgressMap, Settings, StreakRecord, Word};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Storage abstraction for WordJar data.
///
/// WordJar keeps four independent documents, each read and written whole.
/// Writes are last-write-wins; there are no transactions across documents.
/// Methods take `&self` so one backend can be shared between the word
/// store, the progress store and the streak tracker.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Words ===

    /// Load the ordered word list. Missing document reads as empty.
    async fn load_words(&self) -> Result<Vec<Word>>;

    /// Replace the word list.
    async fn save_words(&self, words: &[Word]) -> Result<()>;

    // === Progress ===

    /// Load the star map. Missing document reads as empty.
    async fn load_progress(&self) -> Result<ProgressMap>;

    /// Replace the star map.
    async fn save_progress(&self, progress: &ProgressMap) -> Result<()>;

    // === Streak ===

    /// Load the streak record. Missing document reads as the default.
    async fn load_streak(&self) -> Result<StreakRecord>;

    /// Replace the streak record.
    async fn save_streak(&self, streak: &StreakRecord) -> Result<()>;

    // === Settings ===

    /// Load settings. Missing document reads as the default.
    async fn load_settings(&self) -> Result<Settings>;

    /// Replace settings.
    async fn save_settings(&self, settings: &Settings) -> Result<()>;

    // === Maintenance ===

    /// Remove every document.
    async fn reset_all(&self) -> Result<()>;
}

#[async_trait]
impl<S: Storage + ?Sized> Storage for std::sync::Arc<S> {
    async fn load_words(&self) -> Result<Vec<Word>> {
        (**self).load_words().await
    }

    async fn save_words(&self, words: &[Word]) -> Result<()> {
        (**self).save_words(words).await
    }

    async fn load_progress(&self) -> Result<ProgressMap> {
        (**self).load_progress().await
    }

    async fn save_progress(&self, progress: &ProgressMap) -> Result<()> {
        (**self).save_progress(progress).await
    }

    async fn load_streak(&self) -> Result<StreakRecord> {
        (**self).load_streak().await
    }

    async fn save_streak(&self, streak: &StreakRecord) -> Result<()> {
        (**self).save_streak(streak).await
    }

    async fn load_settings(&self) -> Result<Settings> {
        (**self).load_settings().await
    }

    async fn save_settings(&self, settings: &Settings) -> Result<()> {
        (**self).save_settings(settings).await
    }

    async fn reset_all(&self) -> Result<()> {
        (**self).reset_all().await
    }
}
