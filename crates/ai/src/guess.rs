//! Suffix-based part-of-speech guessing.

use wordjar_core::PartOfSpeech;
use crate::PosGuesser;

/// Suffix rules, checked in order. Longer, more specific endings first.
const RULES: &[(&str, PartOfSpeech)] = &[
    ("ly", PartOfSpeech::Adverb),
    ("tion", PartOfSpeech::Noun),
    ("sion", PartOfSpeech::Noun),
    ("ness", PartOfSpeech::Noun),
    ("ment", PartOfSpeech::Noun),
    ("ity", PartOfSpeech::Noun),
    ("ship", PartOfSpeech::Noun),
    ("ful", PartOfSpeech::Adjective),
    ("ous", PartOfSpeech::Adjective),
    ("ive", PartOfSpeech::Adjective),
    ("able", PartOfSpeech::Adjective),
    ("ible", PartOfSpeech::Adjective),
    ("less", PartOfSpeech::Adjective),
    ("ic", PartOfSpeech::Adjective),
    ("al", PartOfSpeech::Adjective),
    ("ize", PartOfSpeech::Verb),
    ("ise", PartOfSpeech::Verb),
    ("ify", PartOfSpeech::Verb),
    ("ate", PartOfSpeech::Verb),
    ("en", PartOfSpeech::Verb),
    ("er", PartOfSpeech::Noun),
    ("or", PartOfSpeech::Noun),
    ("y", PartOfSpeech::Adjective),
];

/// Guesses from common English suffixes. Words shorter than four letters
/// are never guessed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixPosGuesser;

impl PosGuesser for SuffixPosGuesser {
    fn guess_pos(&self, word: &str) -> Option<PartOfSpeech> {
        let word = word.trim().to_lowercase();
        if word.chars().count() < 4 || word.contains(' ') {
            return None;
        }
        RULES
            .iter()
            .find(|(suffix, _)| word.ends_with(suffix) && word.len() > suffix.len() + 1)
            .map(|(_, pos)| *pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_suffixes() {
        let g = SuffixPosGuesser;
        assert_eq!(g.guess_pos("quickly"), Some(PartOfSpeech::Adverb));
        assert_eq!(g.guess_pos("kindness"), Some(PartOfSpeech::Noun));
        assert_eq!(g.guess_pos("beautiful"), Some(PartOfSpeech::Adjective));
        assert_eq!(g.guess_pos("realize"), Some(PartOfSpeech::Verb));
        assert_eq!(g.guess_pos("teacher"), Some(PartOfSpeech::Noun));
        assert_eq!(g.guess_pos("happy"), Some(PartOfSpeech::Adjective));
    }

    #[test]
    fn test_no_guess() {
        let g = SuffixPosGuesser;
        assert_eq!(g.guess_pos("cat"), None);
        assert_eq!(g.guess_pos("jump"), None);
        assert_eq!(g.guess_pos("ice cream"), None);
    }
}
