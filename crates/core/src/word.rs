//! Word model - a vocabulary entry and its part of speech.

use serde::{Deserialize, Serialize};
use crate::id::WordId;
use crate::Time;

/// A vocabulary entry owned by the word store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Unique identifier
    pub id: WordId,

    /// The word itself, trimmed and lowercase
    pub word: String,

    /// Meaning (may be empty)
    #[serde(default)]
    pub meaning: String,

    /// Part of speech, stored as `""` when untagged
    #[serde(default, with = "pos_field")]
    pub pos: Option<PartOfSpeech>,

    /// Example sentence (may be empty)
    #[serde(default)]
    pub example: String,

    /// When the word was added
    pub date_added: Time,
}

impl Word {
    /// Create a new word. The caller is responsible for normalizing `word`.
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            id: WordId::new(),
            word: word.into(),
            meaning: meaning.into(),
            pos: None,
            example: String::new(),
            date_added: chrono::Utc::now(),
        }
    }

    /// Whether the word carries a part-of-speech tag usable in quizzes.
    pub fn is_tagged(&self) -> bool {
        self.pos.is_some()
    }

    /// Meaning, or the word itself when no meaning was entered.
    pub fn prompt(&self) -> &str {
        if self.meaning.is_empty() {
            &self.word
        } else {
            &self.meaning
        }
    }
}

/// Normalize user input into the stored spelling of a word.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Parts of speech used by the word-type quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    /// A person, place, or thing
    Noun,
    /// An action word
    Verb,
    /// Describes a noun
    Adjective,
    /// Describes a verb
    Adverb,
}

impl PartOfSpeech {
    /// All quiz choices, in display order.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Stored name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Adverb => "Adverb",
        }
    }

    /// Short explanation shown after an answer.
    pub fn description(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "A person, place, or thing",
            PartOfSpeech::Verb => "An action word",
            PartOfSpeech::Adjective => "Describes a noun",
            PartOfSpeech::Adverb => "Describes a verb",
        }
    }

    /// Quiz button icon.
    pub fn icon(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "🧸",
            PartOfSpeech::Verb => "🏃",
            PartOfSpeech::Adjective => "🌈",
            PartOfSpeech::Adverb => "💨",
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PartOfSpeech {
    type Err = UnknownPartOfSpeech;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "noun" => Ok(PartOfSpeech::Noun),
            "verb" => Ok(PartOfSpeech::Verb),
            "adjective" => Ok(PartOfSpeech::Adjective),
            "adverb" => Ok(PartOfSpeech::Adverb),
            _ => Err(UnknownPartOfSpeech(s.to_string())),
        }
    }
}

/// Returned when a string names no known part of speech.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown part of speech: {0:?}")]
pub struct UnknownPartOfSpeech(pub String);

/// Word details produced by a dictionary or an AI lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordInfo {
    /// Meaning, if known
    #[serde(default)]
    pub meaning: Option<String>,

    /// Part of speech, if known
    #[serde(default)]
    pub pos: Option<PartOfSpeech>,

    /// Example sentence, if known
    #[serde(default)]
    pub example: Option<String>,
}

impl WordInfo {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.meaning.as_deref().map_or(true, str::is_empty)
            && self.pos.is_none()
            && self.example.as_deref().map_or(true, str::is_empty)
    }
}

/// `Option<PartOfSpeech>` stored as `""` for untagged words. Unknown tags
/// read back as untagged.
mod pos_field {
    use super::PartOfSpeech;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(pos: &Option<PartOfSpeech>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(pos.map(|p| p.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<PartOfSpeech>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.and_then(|s| s.parse().ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_word_stores_empty_pos() {
        let word = Word::new("apple", "사과");
        let json = serde_json::to_value(&word).unwrap();
        assert_eq!(json["pos"], "");
        assert_eq!(json["word"], "apple");
        assert!(json.get("dateAdded").is_some());
    }

    #[test]
    fn test_tagged_word_roundtrip() {
        let mut word = Word::new("run", "달리다");
        word.pos = Some(PartOfSpeech::Verb);
        let json = serde_json::to_string(&word).unwrap();
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pos, Some(PartOfSpeech::Verb));
        assert_eq!(back, word);
    }

    #[test]
    fn test_unknown_pos_reads_as_untagged() {
        let id = WordId::new();
        let json = format!(
            r#"{{"id":"{}","word":"the","meaning":"","pos":"article","example":"","dateAdded":"2024-01-01T00:00:00Z"}}"#,
            id
        );
        let word: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(word.pos, None);
    }

    #[test]
    fn test_prompt_falls_back_to_word() {
        let word = Word::new("cat", "");
        assert_eq!(word.prompt(), "cat");
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  Apple "), "apple");
    }

    #[test]
    fn test_parse_part_of_speech() {
        assert_eq!("Adverb".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Adverb);
        assert!("".parse::<PartOfSpeech>().is_err());
    }
}
