//! Star records - per-word mastery credit in three skill categories.

use serde::{Deserialize, Serialize};

/// Stars a word can earn in one category.
pub const MAX_STARS_PER_CATEGORY: u8 = 3;

/// Stars a word can earn across all categories.
pub const MAX_STARS_PER_WORD: u32 = MAX_STARS_PER_CATEGORY as u32 * 3;

/// Skill categories that earn stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarCategory {
    /// Spelling game
    Spelling,
    /// Parts-of-speech quiz
    Pos,
    /// Sentence writing
    Sentences,
}

impl StarCategory {
    /// All categories, in challenge phase order.
    pub const ALL: [StarCategory; 3] = [
        StarCategory::Spelling,
        StarCategory::Pos,
        StarCategory::Sentences,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            StarCategory::Spelling => "Spelling",
            StarCategory::Pos => "Word Types",
            StarCategory::Sentences => "Sentences",
        }
    }

    /// Display icon.
    pub fn icon(&self) -> &'static str {
        match self {
            StarCategory::Spelling => "✏️",
            StarCategory::Pos => "🏷️",
            StarCategory::Sentences => "💬",
        }
    }
}

impl std::fmt::Display for StarCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StarCategory::Spelling => "spelling",
            StarCategory::Pos => "pos",
            StarCategory::Sentences => "sentences",
        };
        f.write_str(name)
    }
}

/// Stars earned by one word. Each count stays within
/// `0..=MAX_STARS_PER_CATEGORY`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRecord {
    /// Spelling stars
    #[serde(default)]
    pub spelling: u8,

    /// Parts-of-speech stars
    #[serde(default)]
    pub pos: u8,

    /// Sentence stars
    #[serde(default)]
    pub sentences: u8,
}

impl StarRecord {
    /// Stars in one category.
    pub fn get(&self, category: StarCategory) -> u8 {
        match category {
            StarCategory::Spelling => self.spelling,
            StarCategory::Pos => self.pos,
            StarCategory::Sentences => self.sentences,
        }
    }

    /// Add one star to `category` unless it is already full.
    ///
    /// Returns whether a star was added.
    pub fn award(&mut self, category: StarCategory) -> bool {
        let slot = match category {
            StarCategory::Spelling => &mut self.spelling,
            StarCategory::Pos => &mut self.pos,
            StarCategory::Sentences => &mut self.sentences,
        };
        if *slot >= MAX_STARS_PER_CATEGORY {
            return false;
        }
        *slot += 1;
        true
    }

    /// Sum over all categories.
    pub fn total(&self) -> u32 {
        self.spelling as u32 + self.pos as u32 + self.sentences as u32
    }

    /// Every category is full.
    pub fn is_mastered(&self) -> bool {
        StarCategory::ALL
            .iter()
            .all(|c| self.get(*c) == MAX_STARS_PER_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_caps_at_three() {
        let mut record = StarRecord::default();
        assert!(record.award(StarCategory::Pos));
        assert!(record.award(StarCategory::Pos));
        assert!(record.award(StarCategory::Pos));
        assert!(!record.award(StarCategory::Pos));
        assert_eq!(record.pos, 3);
        assert_eq!(record.total(), 3);
    }

    #[test]
    fn test_mastery_needs_every_category() {
        let mut record = StarRecord { spelling: 3, pos: 3, sentences: 2 };
        assert!(!record.is_mastered());
        record.award(StarCategory::Sentences);
        assert!(record.is_mastered());
        assert_eq!(record.total(), MAX_STARS_PER_WORD);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&StarCategory::Sentences).unwrap(), "\"sentences\"");
        assert_eq!(StarCategory::Pos.to_string(), "pos");
    }
}
