//! In-memory storage, for tests and throwaway sessions.

use std::sync::Arc;
use tokio::sync::Mutex;
use wordjar_core::{ProgressMap, Settings, StreakRecord, Word};
use super::{Result, Storage};

#[derive(Debug, Default)]
struct Documents {
    words: Vec<Word>,
    progress: ProgressMap,
    streak: StreakRecord,
    settings: Settings,
}

/// Storage backend that keeps every document in memory.
///
/// Clones share the same documents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    docs: Arc<Mutex<Documents>>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn load_words(&self) -> Result<Vec<Word>> {
        Ok(self.docs.lock().await.words.clone())
    }

    async fn save_words(&self, words: &[Word]) -> Result<()> {
        self.docs.lock().await.words = words.to_vec();
        Ok(())
    }

    async fn load_progress(&self) -> Result<ProgressMap> {
        Ok(self.docs.lock().await.progress.clone())
    }

    async fn save_progress(&self, progress: &ProgressMap) -> Result<()> {
        self.docs.lock().await.progress = progress.clone();
        Ok(())
    }

    async fn load_streak(&self) -> Result<StreakRecord> {
        Ok(self.docs.lock().await.streak.clone())
    }

    async fn save_streak(&self, streak: &StreakRecord) -> Result<()> {
        self.docs.lock().await.streak = streak.clone();
        Ok(())
    }

    async fn load_settings(&self) -> Result<Settings> {
        Ok(self.docs.lock().await.settings.clone())
    }

    async fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.docs.lock().await.settings = settings.clone();
        Ok(())
    }

    async fn reset_all(&self) -> Result<()> {
        *self.docs.lock().await = Documents::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_documents() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.save_words(&[Word::new("dog", "개")]).await.unwrap();
        assert_eq!(other.load_words().await.unwrap().len(), 1);

        other.reset_all().await.unwrap();
        assert!(storage.load_words().await.unwrap().is_empty());
    }
}
