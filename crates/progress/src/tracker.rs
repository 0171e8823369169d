//! Star bookkeeping service.

use std::sync::Arc;
use async_trait::async_trait;
use tracing::debug;
use wordjar_core::{ProgressMap, StarCategory, StarRecord, WordId};
use wordjar_storage::{Result, Storage};

/// Star bookkeeping service.
///
/// `add_star` is the only way a count goes up and nothing makes one go
/// down; a record disappears only through `remove_word`.
#[async_trait]
pub trait ProgressTracker: Send + Sync {
    /// Stars for one word, or the zero record if it has none.
    async fn word_stars(&self, word_id: WordId) -> Result<StarRecord>;

    /// Award one star. Returns `false` (and writes nothing) when the
    /// category is already full.
    async fn add_star(&self, word_id: WordId, category: StarCategory) -> Result<bool>;

    /// Drop a word's record. No-op when absent.
    async fn remove_word(&self, word_id: WordId) -> Result<()>;

    /// Words whose three categories are all full.
    async fn mastered_count(&self) -> Result<usize>;

    /// Stars across every word and category.
    async fn total_stars(&self) -> Result<u32>;

    /// Every record.
    async fn all(&self) -> Result<ProgressMap>;
}

/// Progress tracker backed by the `progress` storage document.
pub struct ProgressStore<S: Storage + ?Sized> {
    storage: Arc<S>,
}

impl<S: Storage + ?Sized> Clone for ProgressStore<S> {
    fn clone(&self) -> Self {
        Self { storage: Arc::clone(&self.storage) }
    }
}

impl<S: Storage + ?Sized> ProgressStore<S> {
    /// Create a progress store over shared storage.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S: Storage + ?Sized + 'static> ProgressTracker for ProgressStore<S> {
    async fn word_stars(&self, word_id: WordId) -> Result<StarRecord> {
        let all = self.storage.load_progress().await?;
        Ok(all.get(&word_id).copied().unwrap_or_default())
    }

    async fn add_star(&self, word_id: WordId, category: StarCategory) -> Result<bool> {
        let mut all = self.storage.load_progress().await?;
        let record = all.entry(word_id).or_default();
        if !record.award(category) {
            debug!("{} already has full {} stars", word_id, category);
            return Ok(false);
        }
        debug!("Awarded {} star to {} (now {})", category, word_id, record.get(category));
        self.storage.save_progress(&all).await?;
        Ok(true)
    }

    async fn remove_word(&self, word_id: WordId) -> Result<()> {
        let mut all = self.storage.load_progress().await?;
        if all.remove(&word_id).is_some() {
            self.storage.save_progress(&all).await?;
        }
        Ok(())
    }

    async fn mastered_count(&self) -> Result<usize> {
        let all = self.storage.load_progress().await?;
        Ok(all.values().filter(|r| r.is_mastered()).count())
    }

    async fn total_stars(&self) -> Result<u32> {
        let all = self.storage.load_progress().await?;
        Ok(all.values().map(StarRecord::total).sum())
    }

    async fn all(&self) -> Result<ProgressMap> {
        self.storage.load_progress().await
    }
}
