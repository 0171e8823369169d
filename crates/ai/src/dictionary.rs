//! Built-in dictionary lookup.

use std::collections::HashMap;
use async_trait::async_trait;
use wordjar_core::{normalize_word, WordInfo};
use crate::{AssistError, Result, WordLookup};

/// Instant, offline word lookup over a fixed table.
#[derive(Debug, Clone, Default)]
pub struct StaticDictionary {
    entries: HashMap<String, WordInfo>,
}

impl StaticDictionary {
    /// Build from `(word, info)` pairs. Words are normalized.
    pub fn from_entries<I, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, WordInfo)>,
        W: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(w, info)| (normalize_word(w.as_ref()), info))
                .collect(),
        }
    }

    /// Parse a JSON object mapping words to `{meaning, pos, example}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, WordInfo> =
            serde_json::from_str(json).map_err(|e| AssistError::Parse(e.to_string()))?;
        Ok(Self::from_entries(entries))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Synchronous lookup.
    pub fn get(&self, word: &str) -> Option<&WordInfo> {
        self.entries.get(&normalize_word(word))
    }
}

#[async_trait]
impl WordLookup for StaticDictionary {
    async fn lookup(&self, word: &str) -> Result<Option<WordInfo>> {
        Ok(self.get(word).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordjar_core::PartOfSpeech;

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let dict = StaticDictionary::from_json(
            r#"{"Apple": {"meaning": "사과", "pos": "noun", "example": "I eat an apple."}}"#,
        )
        .unwrap();

        let info = dict.lookup(" APPLE ").await.unwrap().unwrap();
        assert_eq!(info.meaning.as_deref(), Some("사과"));
        assert_eq!(info.pos, Some(PartOfSpeech::Noun));
        assert!(dict.lookup("pear").await.unwrap().is_none());
    }

    #[test]
    fn test_bad_json_is_a_parse_error() {
        assert!(matches!(StaticDictionary::from_json("[1, 2]"), Err(AssistError::Parse(_))));
    }
}
