//! Aggregate statistics derived from words, stars and the streak.

use serde::{Deserialize, Serialize};
use crate::stars::{StarCategory, MAX_STARS_PER_WORD};

/// Snapshot of learner statistics. Never stored; always recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Words in the word list
    pub total_words: usize,

    /// Stars across every word and category
    pub total_stars: u32,

    /// Spelling stars across every word
    pub spelling_stars: u32,

    /// Parts-of-speech stars across every word
    pub pos_stars: u32,

    /// Sentence stars across every word
    pub sentence_stars: u32,

    /// Words with every category full
    pub mastered: usize,

    /// Current daily streak
    pub streak: u32,
}

impl AggregateStats {
    /// Stars in one category.
    pub fn category_stars(&self, category: StarCategory) -> u32 {
        match category {
            StarCategory::Spelling => self.spelling_stars,
            StarCategory::Pos => self.pos_stars,
            StarCategory::Sentences => self.sentence_stars,
        }
    }

    /// Overall progress against the per-word star cap.
    pub fn overall(&self) -> OverallProgress {
        OverallProgress::new(self.total_stars, self.total_words)
    }
}

/// Earned stars against the maximum available for the current word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallProgress {
    /// Stars earned
    pub stars: u32,

    /// `word_count * MAX_STARS_PER_WORD`
    pub max_stars: u32,

    /// Rounded percentage (0 when there are no words)
    pub percent: u32,
}

impl OverallProgress {
    /// Compute progress for `stars` earned over `word_count` words.
    pub fn new(stars: u32, word_count: usize) -> Self {
        let max_stars = word_count as u32 * MAX_STARS_PER_WORD;
        Self {
            stars,
            max_stars,
            percent: rounded_percent(stars as usize, max_stars as usize),
        }
    }
}

/// `round(100 * part / whole)` with halves rounded up; 0 when `whole` is 0.
pub fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u32
}
