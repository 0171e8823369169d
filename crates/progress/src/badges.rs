//! Badge evaluation.
//!
//! Badges are never stored. They are recomputed from the current
//! statistics each time, so deleting words can take a badge away again.

use wordjar_core::AggregateStats;

/// A badge and the condition that earns it.
#[derive(Clone, Copy)]
pub struct Badge {
    /// Stable identifier
    pub id: &'static str,

    /// Display name
    pub name: &'static str,

    /// Display icon
    pub icon: &'static str,

    /// Earned when this returns true
    pub predicate: fn(&AggregateStats) -> bool,
}

impl std::fmt::Debug for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Badge").field("id", &self.id).finish()
    }
}

/// Every badge, in display order.
pub static BADGES: [Badge; 13] = [
    Badge { id: "first_word", name: "First Word", icon: "🌱", predicate: |s| s.total_words >= 1 },
    Badge { id: "ten_words", name: "10 Words!", icon: "📚", predicate: |s| s.total_words >= 10 },
    Badge { id: "twenty_words", name: "20 Words!", icon: "📖", predicate: |s| s.total_words >= 20 },
    Badge { id: "first_star", name: "First Star", icon: "⭐", predicate: |s| s.total_stars >= 1 },
    Badge { id: "ten_stars", name: "10 Stars", icon: "🌟", predicate: |s| s.total_stars >= 10 },
    Badge { id: "fifty_stars", name: "50 Stars", icon: "💫", predicate: |s| s.total_stars >= 50 },
    Badge { id: "spelling_ace", name: "Spell Ace", icon: "✏️", predicate: |s| s.spelling_stars >= 10 },
    Badge { id: "pos_pro", name: "Type Pro", icon: "🏷️", predicate: |s| s.pos_stars >= 10 },
    Badge { id: "sentence_star", name: "Writer", icon: "✍️", predicate: |s| s.sentence_stars >= 10 },
    Badge { id: "first_mastery", name: "Mastered 1", icon: "🏆", predicate: |s| s.mastered >= 1 },
    Badge { id: "five_mastery", name: "Mastered 5", icon: "👑", predicate: |s| s.mastered >= 5 },
    Badge { id: "streak_3", name: "3 Day Streak", icon: "🔥", predicate: |s| s.streak >= 3 },
    Badge { id: "streak_7", name: "Week Streak", icon: "💎", predicate: |s| s.streak >= 7 },
];

/// A badge together with whether it is currently earned.
#[derive(Debug, Clone, Copy)]
pub struct BadgeStatus {
    /// The badge
    pub badge: &'static Badge,

    /// Earned under the evaluated statistics
    pub earned: bool,
}

/// Evaluate every badge against `stats`, in display order.
pub fn evaluate(stats: &AggregateStats) -> Vec<BadgeStatus> {
    BADGES
        .iter()
        .map(|badge| BadgeStatus {
            badge,
            earned: (badge.predicate)(stats),
        })
        .collect()
}

/// Ids of the badges earned under `stats`.
pub fn earned_ids(stats: &AggregateStats) -> Vec<&'static str> {
    evaluate(stats)
        .into_iter()
        .filter(|s| s.earned)
        .map(|s| s.badge.id)
        .collect()
}
