//! Spelling game.

use rand::Rng;
use wordjar_ai::AssistSlot;
use wordjar_core::{StarCategory, Word};
use crate::{qualify, Attempt, AttemptDetail, Effect, HintKind, Result, Round, Summary, Turn};

/// Spelling modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpellingMode {
    /// Hints allowed, no score shown
    #[default]
    Practice,
    /// No hints, running score
    Test,
}

/// One letter of a checked answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterMark {
    /// Letter typed
    pub letter: char,
    /// Whether it matches the target at the same position
    pub correct: bool,
}

/// Compare `answer` to `target` position by position.
pub fn letter_marks(answer: &str, target: &str) -> Vec<LetterMark> {
    let mut target = target.chars();
    answer
        .chars()
        .map(|letter| LetterMark { letter, correct: target.next() == Some(letter) })
        .collect()
}

/// Feedback for a checked spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellingFeedback {
    /// Whether the spelling was right
    pub correct: bool,
    /// The answer as compared (trimmed, lowercase)
    pub answer: String,
    /// The correct spelling
    pub target: String,
    /// Per-letter marks for the answer
    pub marks: Vec<LetterMark>,
}

/// Check a spelling. Correct answers award a star and speak the word.
pub(crate) fn check_spelling(word: &Word, input: &str) -> (Attempt, SpellingFeedback, Vec<Effect>) {
    let answer = input.trim().to_lowercase();
    let target = word.word.to_lowercase();
    let correct = answer == target;

    let effects = if correct {
        vec![
            Effect::AwardStar { word_id: word.id, category: StarCategory::Spelling },
            Effect::Speak { text: word.word.clone() },
        ]
    } else {
        Vec::new()
    };

    let feedback = SpellingFeedback {
        correct,
        marks: letter_marks(&answer, &target),
        answer: answer.clone(),
        target,
    };
    let attempt = Attempt {
        word_id: word.id,
        word: word.word.clone(),
        category: StarCategory::Spelling,
        correct,
        detail: AttemptDetail::Spelling { answer },
    };
    (attempt, feedback, effects)
}

/// Result of asking for a hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// Hint text to show now
    Shown(String),
    /// An assistant hint was requested; see the turn's effects
    Requested,
    /// No more hints for this word
    Unavailable,
}

/// Spelling round: the learner sees the meaning and types the word.
#[derive(Debug)]
pub struct SpellingGame {
    mode: SpellingMode,
    round: Round,
    hint_level: u8,
    score: u32,
    slot: AssistSlot,
}

impl SpellingGame {
    /// Start a round over every word, shuffled.
    pub fn start<R: Rng + ?Sized>(words: &[Word], mode: SpellingMode, rng: &mut R) -> Result<Self> {
        let words = qualify::any_words(words)?;
        Ok(Self {
            mode,
            round: Round::shuffled(words, rng),
            hint_level: 0,
            score: 0,
            slot: AssistSlot::new(),
        })
    }

    /// Mode of this round.
    pub fn mode(&self) -> SpellingMode {
        self.mode
    }

    /// The question loop.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Word being asked.
    pub fn current(&self) -> Option<&Word> {
        self.round.current()
    }

    /// Running score, shown in test mode only.
    pub fn score(&self) -> Option<u32> {
        (self.mode == SpellingMode::Test).then_some(self.score)
    }

    /// Next hint for the current word.
    ///
    /// Level 1 names the first letter, level 2 the length, level 3 asks
    /// the assistant and ends hints for this word. Test mode has none.
    pub fn hint(&mut self) -> Turn<Hint> {
        let word = match self.round.current() {
            Some(w) if self.mode == SpellingMode::Practice && !self.round.is_answered() => w,
            _ => return Turn::new(Hint::Unavailable),
        };
        if self.hint_level >= 3 {
            return Turn::new(Hint::Unavailable);
        }
        self.hint_level += 1;

        let mut letters = word.word.chars();
        let first = letters.next().unwrap_or_default();
        match self.hint_level {
            1 => Turn::new(Hint::Shown(format!("Starts with \"{}\"", first.to_uppercase()))),
            2 => {
                let blanks = "_".repeat(letters.count());
                let len = word.word.chars().count();
                Turn::new(Hint::Shown(format!("{} letters: {}{}", len, first, blanks)))
            }
            _ => Turn::with(
                Hint::Requested,
                vec![Effect::RequestHint {
                    ticket: self.slot.begin(),
                    word: word.word.clone(),
                    meaning: word.meaning.clone(),
                    kind: HintKind::Spelling,
                }],
            ),
        }
    }

    /// Hints used on the current word.
    pub fn hint_level(&self) -> u8 {
        self.hint_level
    }

    /// Check an answer. Ignored once the word has been answered.
    pub fn submit(&mut self, input: &str) -> Turn<Option<SpellingFeedback>> {
        let Some(word) = self.round.current() else {
            return Turn::new(None);
        };
        if self.round.is_answered() {
            return Turn::new(None);
        }

        let (attempt, feedback, effects) = check_spelling(word, input);
        if feedback.correct && self.mode == SpellingMode::Test {
            self.score += 1;
        }
        self.slot.invalidate();
        self.round.record(attempt);
        Turn::with(Some(feedback), effects)
    }

    /// Move on once the current word has an answer. Finishing the round
    /// returns the results effects.
    pub fn next(&mut self) -> Vec<Effect> {
        if !self.round.is_answered() {
            return Vec::new();
        }
        self.slot.invalidate();
        self.hint_level = 0;
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
