//! Unique identifiers for WordJar entities.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a Word.
///
/// Serialized as its 26-character ULID string, so it can also be used as a
/// JSON object key in the progress map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordId(Ulid);

impl WordId {
    /// Generate a new WordId
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for WordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for WordId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
