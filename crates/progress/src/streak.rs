//! Daily streak tracking.

use std::sync::Arc;
use chrono::{NaiveDate, Utc};
use tracing::info;
use wordjar_storage::{Result, Storage};

/// Records one visit per day and reports the running streak.
pub struct StreakTracker<S: Storage + ?Sized> {
    storage: Arc<S>,
}

impl<S: Storage + ?Sized> Clone for StreakTracker<S> {
    fn clone(&self) -> Self {
        Self { storage: Arc::clone(&self.storage) }
    }
}

impl<S: Storage + ?Sized> StreakTracker<S> {
    /// Create a tracker over shared storage.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Record a visit on `today` and return the resulting streak.
    ///
    /// Writes only when the day changed.
    pub async fn touch(&self, today: NaiveDate) -> Result<u32> {
        let current = self.storage.load_streak().await?;
        let next = current.advanced(today);
        if next != current {
            if next.count > current.count {
                info!("Streak extended to {} days", next.count);
            } else {
                info!("Streak restarted");
            }
            self.storage.save_streak(&next).await?;
        }
        Ok(next.count)
    }

    /// Record a visit on the current UTC day.
    pub async fn touch_today(&self) -> Result<u32> {
        self.touch(Utc::now().date_naive()).await
    }

    /// Current streak without recording a visit.
    pub async fn current(&self) -> Result<u32> {
        Ok(self.storage.load_streak().await?.count)
    }
}
