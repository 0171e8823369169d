//! Parts-of-speech quiz.

use rand::Rng;
use wordjar_ai::PosGuesser;
use wordjar_core::{PartOfSpeech, StarCategory, Word};
use crate::{qualify, Attempt, AttemptDetail, Effect, Result, Round, Summary, Turn};

/// Feedback for a chosen part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosFeedback {
    /// Whether the choice was right
    pub correct: bool,
    /// The learner's choice
    pub chosen: PartOfSpeech,
    /// The stored tag
    pub expected: PartOfSpeech,
}

/// Check a choice against a tagged word. Untagged words cannot be asked.
pub(crate) fn check_pos(word: &Word, chosen: PartOfSpeech) -> Option<(Attempt, PosFeedback, Vec<Effect>)> {
    let expected = word.pos?;
    let correct = chosen == expected;
    let effects = if correct {
        vec![Effect::AwardStar { word_id: word.id, category: StarCategory::Pos }]
    } else {
        Vec::new()
    };
    let attempt = Attempt {
        word_id: word.id,
        word: word.word.clone(),
        category: StarCategory::Pos,
        correct,
        detail: AttemptDetail::Pos { chosen, expected },
    };
    Some((attempt, PosFeedback { correct, chosen, expected }, effects))
}

/// Word-type quiz: the learner sees a word and picks its part of speech.
#[derive(Debug)]
pub struct PosGame {
    round: Round,
    score: u32,
}

impl PosGame {
    /// Start a quiz over the tagged words, shuffled.
    ///
    /// The returned effects carry any guessed tags and should be applied
    /// before play starts.
    pub fn start<R: Rng + ?Sized>(
        words: &[Word],
        guesser: &dyn PosGuesser,
        rng: &mut R,
    ) -> Result<(Self, Vec<Effect>)> {
        let (words, effects) = qualify::tagged_words(words, guesser)?;
        let game = Self { round: Round::shuffled(words, rng), score: 0 };
        Ok((game, effects))
    }

    /// The question loop.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Word being asked.
    pub fn current(&self) -> Option<&Word> {
        self.round.current()
    }

    /// Correct answers so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Answer the current question. A second answer is ignored.
    pub fn choose(&mut self, chosen: PartOfSpeech) -> Turn<Option<PosFeedback>> {
        if self.round.is_answered() {
            return Turn::new(None);
        }
        let Some((attempt, feedback, effects)) = self.round.current().and_then(|w| check_pos(w, chosen))
        else {
            return Turn::new(None);
        };
        if feedback.correct {
            self.score += 1;
        }
        self.round.record(attempt);
        Turn::with(Some(feedback), effects)
    }

    /// Move on once the current word has an answer. Finishing the quiz
    /// returns the results effects.
    pub fn next(&mut self) -> Vec<Effect> {
        if !self.round.is_answered() {
            return Vec::new();
        }
        if self.round.advance() {
            Vec::new()
        } else {
            self.summary().effects()
        }
    }

    /// Whether the quiz is over.
    pub fn is_finished(&self) -> bool {
        self.round.is_finished()
    }

    /// Score of the quiz so far.
    pub fn summary(&self) -> Summary {
        self.round.summary()
    }
}
