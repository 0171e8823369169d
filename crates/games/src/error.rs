//! Game errors.

use wordjar_storage::StorageError;
use wordjar_words::WordError;

/// Result type for game operations.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors from starting games or applying their effects.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Too few words qualify for the game
    #[error("Need at least {needed} {kind}, found {found}")]
    NotEnoughWords {
        /// Minimum required
        needed: usize,
        /// How many qualified
        found: usize,
        /// What kind of words were counted
        kind: &'static str,
    },

    /// Storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Word store failure
    #[error(transparent)]
    Words(#[from] WordError),
}
