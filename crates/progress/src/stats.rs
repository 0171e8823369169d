//! Aggregate statistics and the per-word progress report.

use std::sync::Arc;
use wordjar_core::{AggregateStats, ProgressMap, StarRecord, Word, WordId};
use wordjar_storage::{Result, Storage};

/// Fold the star map into aggregate statistics.
pub fn aggregate(word_count: usize, progress: &ProgressMap, streak: u32) -> AggregateStats {
    let mut stats = AggregateStats {
        total_words: word_count,
        streak,
        ..Default::default()
    };

    for record in progress.values() {
        stats.spelling_stars += record.spelling as u32;
        stats.pos_stars += record.pos as u32;
        stats.sentence_stars += record.sentences as u32;
        if record.is_mastered() {
            stats.mastered += 1;
        }
    }
    stats.total_stars = stats.spelling_stars + stats.pos_stars + stats.sentence_stars;
    stats
}

/// One row of the per-word progress report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordProgress {
    /// Word id
    pub word_id: WordId,

    /// The word
    pub word: String,

    /// Stars earned so far
    pub stars: StarRecord,
}

/// Pair each word, in list order, with its stars.
pub fn word_report(words: &[Word], progress: &ProgressMap) -> Vec<WordProgress> {
    words
        .iter()
        .map(|w| WordProgress {
            word_id: w.id,
            word: w.word.clone(),
            stars: progress.get(&w.id).copied().unwrap_or_default(),
        })
        .collect()
}

/// Render a star group as filled and empty stars, e.g. `⭐⭐☆`.
pub fn star_bar(count: u8, max: u8) -> String {
    (0..max).map(|i| if i < count { '⭐' } else { '☆' }).collect()
}

/// Reads the current documents and derives statistics from them.
pub struct StatsCollector<S: Storage + ?Sized> {
    storage: Arc<S>,
}

impl<S: Storage + ?Sized> StatsCollector<S> {
    /// Create a collector over shared storage.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Current aggregate statistics.
    pub async fn collect(&self) -> Result<AggregateStats> {
        let words = self.storage.load_words().await?;
        let progress = self.storage.load_progress().await?;
        let streak = self.storage.load_streak().await?;
        Ok(aggregate(words.len(), &progress, streak.count))
    }

    /// Current per-word report.
    pub async fn report(&self) -> Result<Vec<WordProgress>> {
        let words = self.storage.load_words().await?;
        let progress = self.storage.load_progress().await?;
        Ok(word_report(&words, &progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordjar_core::StreakRecord;
    use wordjar_storage::MemoryStorage;

    #[test]
    fn test_aggregate_sums_categories() {
        let mut progress = ProgressMap::new();
        progress.insert(WordId::new(), StarRecord { spelling: 3, pos: 3, sentences: 3 });
        progress.insert(WordId::new(), StarRecord { spelling: 1, pos: 0, sentences: 2 });

        let stats = aggregate(2, &progress, 5);
        assert_eq!(stats.spelling_stars, 4);
        assert_eq!(stats.pos_stars, 3);
        assert_eq!(stats.sentence_stars, 5);
        assert_eq!(stats.total_stars, 12);
        assert_eq!(stats.mastered, 1);
        assert_eq!(stats.streak, 5);
    }

    #[test]
    fn test_star_bar() {
        assert_eq!(star_bar(2, 3), "⭐⭐☆");
        assert_eq!(star_bar(0, 3), "☆☆☆");
    }

    #[tokio::test]
    async fn test_collect_half_progress() {
        let storage = Arc::new(MemoryStorage::new());
        let a = Word::new("apple", "");
        let b = Word::new("banana", "");
        storage.save_words(&[a.clone(), b.clone()]).await.unwrap();

        let mut progress = ProgressMap::new();
        progress.insert(a.id, StarRecord { spelling: 3, pos: 3, sentences: 3 });
        storage.save_progress(&progress).await.unwrap();
        storage.save_streak(&StreakRecord { last_date: None, count: 2 }).await.unwrap();

        let collector = StatsCollector::new(storage);
        let stats = collector.collect().await.unwrap();
        assert_eq!(stats.overall().max_stars, 18);
        assert_eq!(stats.overall().percent, 50);
        assert_eq!(stats.streak, 2);

        let report = collector.report().await.unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].word, "apple");
        assert_eq!(report[1].stars, StarRecord::default());
    }
}
