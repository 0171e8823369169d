//! The question loop shared by every game.

use rand::seq::SliceRandom;
use rand::Rng;
use wordjar_core::{rounded_percent, PartOfSpeech, StarCategory, Word, WordId};
use crate::Effect;

/// One recorded answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    /// Word asked about
    pub word_id: WordId,

    /// Its spelling, for result lists
    pub word: String,

    /// Game category of the question
    pub category: StarCategory,

    /// Whether the answer was right
    pub correct: bool,

    /// What was answered
    pub detail: AttemptDetail,
}

/// Category-specific answer data.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptDetail {
    /// Typed spelling
    Spelling {
        /// Normalized answer
        answer: String,
    },
    /// Chosen part of speech
    Pos {
        /// The learner's choice
        chosen: PartOfSpeech,
        /// The stored tag
        expected: PartOfSpeech,
    },
    /// Written sentence
    Sentence {
        /// The sentence as submitted
        text: String,
    },
}

/// Result tier, from percent correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// Below 50%
    Bottom,
    /// 50% and up
    Low,
    /// 70% and up
    Mid,
    /// 90% and up; celebrated
    Top,
}

impl Tier {
    /// Tier for a percentage.
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            90.. => Tier::Top,
            70.. => Tier::Mid,
            50.. => Tier::Low,
            _ => Tier::Bottom,
        }
    }

    /// Stars shown on the results screen.
    pub fn stars(&self) -> u8 {
        match self {
            Tier::Top => 3,
            Tier::Mid => 2,
            Tier::Low => 1,
            Tier::Bottom => 0,
        }
    }
}

/// Score of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Correct answers
    pub correct: usize,
    /// Recorded answers
    pub total: usize,
    /// Rounded percent correct, 0 when nothing was recorded
    pub percent: u32,
    /// Result tier
    pub tier: Tier,
}

impl Summary {
    /// Score a list of attempts.
    pub fn of<'a>(attempts: impl IntoIterator<Item = &'a Attempt>) -> Self {
        let (correct, total) = attempts
            .into_iter()
            .fold((0, 0), |(c, t), a| (c + a.correct as usize, t + 1));
        let percent = rounded_percent(correct, total);
        Self { correct, total, percent, tier: Tier::from_percent(percent) }
    }

    /// Effects to fire when results are shown.
    pub fn effects(&self) -> Vec<Effect> {
        if self.tier == Tier::Top {
            vec![Effect::Celebrate]
        } else {
            Vec::new()
        }
    }
}

/// Walks a fixed list of words one question at a time.
///
/// Each question takes at most one recorded answer. Moving past the last
/// word finishes the round.
#[derive(Debug, Clone)]
pub struct Round {
    words: Vec<Word>,
    index: usize,
    answered: bool,
    attempts: Vec<Attempt>,
}

impl Round {
    /// Round over `words` in the given order.
    pub fn new(words: Vec<Word>) -> Self {
        Self { words, index: 0, answered: false, attempts: Vec::new() }
    }

    /// Round over `words` in a random order.
    pub fn shuffled<R: Rng + ?Sized>(mut words: Vec<Word>, rng: &mut R) -> Self {
        words.shuffle(rng);
        Self::new(words)
    }

    /// Word being asked, or `None` once finished.
    pub fn current(&self) -> Option<&Word> {
        self.words.get(self.index)
    }

    /// Words in asking order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// 1-based number of the current question.
    pub fn position(&self) -> usize {
        (self.index + 1).min(self.words.len())
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the round has no questions.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the current question already has an answer.
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Whether every question has been passed.
    pub fn is_finished(&self) -> bool {
        self.index >= self.words.len()
    }

    /// Record the answer to the current question.
    pub(crate) fn record(&mut self, attempt: Attempt) {
        self.answered = true;
        self.attempts.push(attempt);
    }

    /// Move to the next question once the current one has an answer.
    /// Returns `true` while questions remain.
    pub fn advance(&mut self) -> bool {
        if !self.is_finished() && self.answered {
            self.index += 1;
            self.answered = false;
        }
        !self.is_finished()
    }

    /// Answers recorded so far.
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Score so far.
    pub fn summary(&self) -> Summary {
        Summary::of(&self.attempts)
    }
}
