//! Sentence-writing game.

use rand::Rng;
use wordjar_ai::AssistSlot;
use wordjar_core::{StarCategory, Word};
use crate::{qualify, Attempt, AttemptDetail, Effect, HintKind, Result, Round, Summary, Turn};

/// Shortest sentence accepted, in words.
pub const MIN_SENTENCE_WORDS: usize = 3;

/// Problems with a sentence, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SentenceIssue {
    /// The target word does not appear
    MissingWord,
    /// Does not start with a capital letter
    NoCapital,
    /// Does not end in `.`, `!` or `?`
    NoPunctuation,
    /// Fewer than [`MIN_SENTENCE_WORDS`] words
    TooShort,
}

impl SentenceIssue {
    /// Message shown to the learner.
    pub fn message(&self, word: &str) -> String {
        match self {
            SentenceIssue::MissingWord => format!("Try to use the word \"{}\" in your sentence!", word),
            SentenceIssue::NoCapital => "Start with a capital letter!".to_string(),
            SentenceIssue::NoPunctuation => {
                "End with a period (.), question mark (?), or exclamation mark (!)".to_string()
            }
            SentenceIssue::TooShort => {
                format!("Try to write a longer sentence (at least {} words)!", MIN_SENTENCE_WORDS)
            }
        }
    }
}

/// Every issue with `sentence` as a use of `word`, most important first.
pub fn validate_sentence(word: &str, sentence: &str) -> Vec<SentenceIssue> {
    let mut issues = Vec::new();

    if !sentence.to_lowercase().contains(&word.to_lowercase()) {
        issues.push(SentenceIssue::MissingWord);
    }
    if sentence.chars().next().is_some_and(char::is_lowercase) {
        issues.push(SentenceIssue::NoCapital);
    }
    if !sentence.ends_with(['.', '!', '?']) {
        issues.push(SentenceIssue::NoPunctuation);
    }
    if sentence.split_whitespace().count() < MIN_SENTENCE_WORDS {
        issues.push(SentenceIssue::TooShort);
    }
    issues
}

/// Verdict on a submitted sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceFeedback {
    /// Nothing was written; not recorded
    Empty,
    /// The target word is missing; not recorded, try again
    MissingWord,
    /// Recorded. `issue` is the most important problem, if any
    Checked {
        /// Whether the sentence passed every check
        correct: bool,
        /// First issue found
        issue: Option<SentenceIssue>,
    },
}

/// Check a sentence. No attempt comes back when nothing should be recorded.
pub(crate) fn check_sentence(
    word: &Word,
    input: &str,
) -> (SentenceFeedback, Option<Attempt>, Vec<Effect>) {
    let text = input.trim();
    if text.is_empty() {
        return (SentenceFeedback::Empty, None, Vec::new());
    }

    let issue = validate_sentence(&word.word, text).into_iter().next();
    if issue == Some(SentenceIssue::MissingWord) {
        return (SentenceFeedback::MissingWord, None, Vec::new());
    }

    let correct = issue.is_none();
    let effects = if correct {
        vec![Effect::AwardStar { word_id: word.id, category: StarCategory::Sentences }]
    } else {
        Vec::new()
    };
    let attempt = Attempt {
        word_id: word.id,
        word: word.word.clone(),
        category: StarCategory::Sentences,
        correct,
        detail: AttemptDetail::Sentence { text: text.to_string() },
    };
    (SentenceFeedback::Checked { correct, issue }, Some(attempt), effects)
}

/// Sentence round: the learner writes a sentence using each word.
#[derive(Debug)]
pub struct SentenceGame {
    round: Round,
    score: u32,
    example_used: bool,
    starter_used: bool,
    slot: AssistSlot,
}

impl SentenceGame {
    /// Start a round over every word, shuffled.
    pub fn start<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Result<Self> {
        let words = qualify::any_words(words)?;
        Ok(Self {
            round: Round::shuffled(words, rng),
            score: 0,
            example_used: false,
            starter_used: false,
            slot: AssistSlot::new(),
        })
    }

    /// The question loop.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Word being asked.
    pub fn current(&self) -> Option<&Word> {
        self.round.current()
    }

    /// Accepted sentences so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Submit a sentence. Ignored once the word has a recorded result.
    ///
    /// A correct sentence also asks the assistant for a review.
    pub fn submit(&mut self, input: &str) -> Turn<Option<SentenceFeedback>> {
        if self.round.is_answered() {
            return Turn::new(None);
        }
        let Some(word) = self.round.current() else {
            return Turn::new(None);
        };

        let (feedback, attempt, mut effects) = check_sentence(word, input);
        if let Some(attempt) = attempt {
            if attempt.correct {
                self.score += 1;
                effects.push(Effect::RequestReview {
                    ticket: self.slot.begin(),
                    word: word.word.clone(),
                    sentence: input.trim().to_string(),
                });
            }
            self.round.record(attempt);
        }
        Turn::with(Some(feedback), effects)
    }

    /// Ask for an example sentence. Once per word.
    pub fn example(&mut self) -> Option<Effect> {
        if self.example_used {
            return None;
        }
        let effect = self.request(HintKind::Example)?;
        self.example_used = true;
        Some(effect)
    }

    /// Ask for a sentence opening. Once per word.
    pub fn starter(&mut self) -> Option<Effect> {
        if self.starter_used {
            return None;
        }
        let effect = self.request(HintKind::Starter)?;
        self.starter_used = true;
        Some(effect)
    }

    fn request(&self, kind: HintKind) -> Option<Effect> {
        let word = self.round.current()?;
        Some(Effect::RequestHint {
            ticket: self.slot.begin(),
            word: word.word.clone(),
            meaning: word.meaning.clone(),
            kind,
        })
    }

    /// Move on once the current word has a recorded result. A sentence
    /// missing the word does not count, so the learner stays on it.
    /// Finishing the round returns the results effects.
    pub fn next(&mut self) -> Vec<Effect> {
        if !self.round.is_answered() {
            return Vec::new();
        }
        self.slot.invalidate();
        self.example_used = false;
        self.starter_used = false;
        if self.round.advance() {
            Vec::new()
        } else {
            self.summary().effects()
        }
    }

    /// Whether the round is over.
    pub fn is_finished(&self) -> bool {
        self.round.is_finished()
    }

    /// Score of the round so far.
    pub fn summary(&self) -> Summary {
        self.round.summary()
    }

    /// Keep an assistant reply only if its request is still current.
    pub fn accept_assist(&self, effect: &Effect, reply: String) -> Option<String> {
        self.slot.accept(effect.ticket()?, reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game() -> SentenceGame {
        let mut rng = StdRng::seed_from_u64(9);
        SentenceGame::start(&[Word::new("apple", "사과")], &mut rng).unwrap()
    }

    fn two_word_game() -> SentenceGame {
        let mut rng = StdRng::seed_from_u64(9);
        let words = [Word::new("apple", "사과"), Word::new("pear", "배")];
        SentenceGame::start(&words, &mut rng).unwrap()
    }

    #[test]
    fn test_validate_order() {
        assert_eq!(
            validate_sentence("apple", "an apple"),
            vec![SentenceIssue::NoCapital, SentenceIssue::NoPunctuation, SentenceIssue::TooShort]
        );
        assert!(validate_sentence("apple", "I like apples.").is_empty());
        assert!(validate_sentence("Apple", "I like APPLES!").is_empty());
        assert_eq!(
            validate_sentence("apple", "banana is tasty.")[0],
            SentenceIssue::MissingWord
        );
    }

    #[test]
    fn test_missing_punctuation_is_recorded_wrong() {
        let mut game = game();
        let turn = game.submit("I like apple");
        assert_eq!(
            turn.outcome,
            Some(SentenceFeedback::Checked {
                correct: false,
                issue: Some(SentenceIssue::NoPunctuation)
            })
        );
        assert!(turn.effects.is_empty());
        assert_eq!(game.round().attempts().len(), 1);
        assert!(game.next().is_empty());
        assert!(game.is_finished());
    }

    #[test]
    fn test_missing_word_asks_again() {
        let mut game = game();
        assert_eq!(
            game.submit("banana is tasty.").outcome,
            Some(SentenceFeedback::MissingWord)
        );
        assert_eq!(game.submit("   ").outcome, Some(SentenceFeedback::Empty));
        assert!(game.round().attempts().is_empty());

        let turn = game.submit("I ate an apple today!");
        assert_eq!(
            turn.outcome,
            Some(SentenceFeedback::Checked { correct: true, issue: None })
        );
        assert!(matches!(
            turn.effects[0],
            Effect::AwardStar { category: StarCategory::Sentences, .. }
        ));
        assert!(matches!(&turn.effects[1], Effect::RequestReview { sentence, .. } if sentence == "I ate an apple today!"));
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn test_example_and_starter_once_per_word() {
        let mut game = game();
        let example = game.example().unwrap();
        assert!(matches!(example, Effect::RequestHint { kind: HintKind::Example, .. }));
        assert!(game.example().is_none());
        assert!(game.starter().is_some());
        assert!(game.starter().is_none());

        game.submit("I like apple");
        game.next();
        assert!(game.is_finished());
        assert_eq!(game.accept_assist(&example, "I eat an apple.".into()), None);
        assert!(game.example().is_none());
    }

    #[test]
    fn test_missing_word_blocks_next() {
        let mut game = two_word_game();
        let first = game.current().cloned().unwrap();
        let other = if first.word == "apple" { "pear" } else { "apple" };

        let turn = game.submit(&format!("The {} is tasty.", other));
        assert_eq!(turn.outcome, Some(SentenceFeedback::MissingWord));
        assert!(game.next().is_empty());
        assert_eq!(game.current(), Some(&first));
        assert!(game.round().attempts().is_empty());

        game.submit(&format!("The {} is tasty.", first.word));
        game.next();
        assert_ne!(game.current(), Some(&first));
        assert!(!game.is_finished());
    }

    #[test]
    fn test_skipping_cannot_inflate_the_score() {
        let mut game = two_word_game();
        let first = game.current().cloned().unwrap();
        game.submit(&format!("I like the {}.", first.word));
        game.next();
        let effects = game.next();
        assert!(effects.is_empty());
        assert!(!game.is_finished());
        assert_eq!(game.summary().total, 1);
    }

    #[test]
    fn test_non_latin_start_counts_as_capital() {
        assert!(validate_sentence("사과", "사과 is very good.").is_empty());
    }
}
