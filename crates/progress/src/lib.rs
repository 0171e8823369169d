//! Progress Tracking
//!
//! Per-word stars, aggregate statistics, badges and the daily streak.

#![warn(missing_docs)]

pub mod tracker;
pub mod stats;
pub mod badges;
pub mod streak;

pub use tracker::{ProgressTracker, ProgressStore};
pub use stats::{aggregate, star_bar, word_report, StatsCollector, WordProgress};
pub use badges::{earned_ids, evaluate, Badge, BadgeStatus, BADGES};
pub use streak::StreakTracker;
