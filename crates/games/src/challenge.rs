//! Challenge: spelling, word types and sentences over the same words.
//!
//! Each phase opens with an intro, then asks every word once in the order
//! fixed at the start. After the last phase the results report a score
//! per category and per word, and the words missed anywhere can be
//! retried as a fresh challenge.

use std::collections::BTreeSet;
use rand::seq::SliceRandom;
use rand::Rng;
use wordjar_ai::PosGuesser;
use wordjar_core::{PartOfSpeech, StarCategory, Word, WordId};
use crate::pos::{check_pos, PosFeedback};
use crate::sentences::{check_sentence, SentenceFeedback};
use crate::spelling::{check_spelling, SpellingFeedback};
use crate::{qualify, Attempt, Effect, Result, Round, Summary, Turn};

/// Where the challenge is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Phase intro, waiting for [`ChallengeGame::begin`]
    Intro(StarCategory),
    /// Asking questions in a phase
    Question(StarCategory),
    /// All phases done
    Results,
}

/// An answer to the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Typed spelling
    Spelling(String),
    /// Chosen part of speech
    Pos(PartOfSpeech),
    /// Written sentence
    Sentence(String),
}

impl Answer {
    fn category(&self) -> StarCategory {
        match self {
            Answer::Spelling(_) => StarCategory::Spelling,
            Answer::Pos(_) => StarCategory::Pos,
            Answer::Sentence(_) => StarCategory::Sentences,
        }
    }
}

/// Feedback for an answer, by phase.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// Spelling phase
    Spelling(SpellingFeedback),
    /// Word-type phase
    Pos(PosFeedback),
    /// Sentence phase
    Sentence(SentenceFeedback),
}

/// Score in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScore {
    /// Category
    pub category: StarCategory,
    /// Correct answers
    pub correct: usize,
    /// Recorded answers
    pub total: usize,
}

/// How one word did in each phase. `None` means no answer was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordResult {
    /// Word id
    pub word_id: WordId,
    /// The word
    pub word: String,
    /// Spelling phase
    pub spelling: Option<bool>,
    /// Word-type phase
    pub pos: Option<bool>,
    /// Sentence phase
    pub sentences: Option<bool>,
}

impl WordResult {
    /// Result in `category`.
    pub fn get(&self, category: StarCategory) -> Option<bool> {
        match category {
            StarCategory::Spelling => self.spelling,
            StarCategory::Pos => self.pos,
            StarCategory::Sentences => self.sentences,
        }
    }
}

/// Results of a finished challenge.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeReport {
    /// Overall score
    pub summary: Summary,
    /// Score per category, in phase order
    pub categories: Vec<CategoryScore>,
    /// Per-word breakdown, in the order words were first answered
    pub words: Vec<WordResult>,
    /// Words missed in any phase
    pub retry_words: usize,
    /// Whether this run was itself a retry
    pub is_retry: bool,
}

/// The three-phase challenge.
#[derive(Debug)]
pub struct ChallengeGame {
    stage: Stage,
    round: Round,
    done: Vec<Attempt>,
    is_retry: bool,
}

impl ChallengeGame {
    /// Start a challenge over the tagged words, shuffled once for all
    /// phases.
    ///
    /// The returned effects carry any guessed tags and should be applied
    /// before play starts.
    pub fn start<R: Rng + ?Sized>(
        words: &[Word],
        guesser: &dyn PosGuesser,
        rng: &mut R,
    ) -> Result<(Self, Vec<Effect>)> {
        let (mut words, effects) = qualify::tagged_words(words, guesser)?;
        words.shuffle(rng);
        Ok((Self::over(words, false), effects))
    }

    fn over(words: Vec<Word>, is_retry: bool) -> Self {
        Self {
            stage: Stage::Intro(StarCategory::Spelling),
            round: Round::new(words),
            done: Vec::new(),
            is_retry,
        }
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Whether this run is a retry.
    pub fn is_retry(&self) -> bool {
        self.is_retry
    }

    /// The current phase's question loop.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Leave the intro and ask the first question of the phase.
    pub fn begin(&mut self) {
        if let Stage::Intro(category) = self.stage {
            self.stage = Stage::Question(category);
        }
    }

    /// Word being asked, outside intros and results.
    pub fn current(&self) -> Option<&Word> {
        match self.stage {
            Stage::Question(_) => self.round.current(),
            _ => None,
        }
    }

    /// Answer the current question.
    ///
    /// Ignored when no question is open, when the answer is for another
    /// phase, or when the question already has a recorded answer.
    pub fn answer(&mut self, answer: Answer) -> Turn<Option<Feedback>> {
        let Stage::Question(category) = self.stage else {
            return Turn::new(None);
        };
        if answer.category() != category || self.round.is_answered() {
            return Turn::new(None);
        }
        let Some(word) = self.round.current() else {
            return Turn::new(None);
        };

        let (feedback, attempt, effects) = match answer {
            Answer::Spelling(input) => {
                let (attempt, feedback, effects) = check_spelling(word, &input);
                (Feedback::Spelling(feedback), Some(attempt), effects)
            }
            Answer::Pos(chosen) => match check_pos(word, chosen) {
                Some((attempt, feedback, effects)) => (Feedback::Pos(feedback), Some(attempt), effects),
                None => return Turn::new(None),
            },
            Answer::Sentence(input) => {
                let (feedback, attempt, effects) = check_sentence(word, &input);
                (Feedback::Sentence(feedback), attempt, effects)
            }
        };

        if let Some(attempt) = attempt {
            self.round.record(attempt);
        }
        Turn::with(Some(feedback), effects)
    }

    /// Move on once the current question has a recorded answer. Passing
    /// the last word of a phase opens the next intro; passing the last
    /// phase shows results and returns their effects.
    pub fn next(&mut self) -> Vec<Effect> {
        let Stage::Question(category) = self.stage else {
            return Vec::new();
        };
        if !self.round.is_answered() || self.round.advance() {
            return Vec::new();
        }

        let words = self.round.words().to_vec();
        let finished = std::mem::replace(&mut self.round, Round::new(words));
        self.done.extend_from_slice(finished.attempts());

        match following(category) {
            Some(next) => {
                self.stage = Stage::Intro(next);
                Vec::new()
            }
            None => {
                self.stage = Stage::Results;
                self.summary().effects()
            }
        }
    }

    /// Every recorded answer, across phases.
    pub fn attempts(&self) -> impl Iterator<Item = &Attempt> {
        self.done.iter().chain(self.round.attempts())
    }

    /// Overall score so far.
    pub fn summary(&self) -> Summary {
        Summary::of(self.attempts())
    }

    /// Ids of words missed in any phase.
    pub fn missed(&self) -> BTreeSet<WordId> {
        self.attempts().filter(|a| !a.correct).map(|a| a.word_id).collect()
    }

    /// Per-category and per-word results.
    pub fn report(&self) -> ChallengeReport {
        let categories = StarCategory::ALL
            .into_iter()
            .map(|category| {
                let (correct, total) = self
                    .attempts()
                    .filter(|a| a.category == category)
                    .fold((0, 0), |(c, t), a| (c + a.correct as usize, t + 1));
                CategoryScore { category, correct, total }
            })
            .collect();

        let mut words: Vec<WordResult> = Vec::new();
        for attempt in self.attempts() {
            let index = match words.iter().position(|w| w.word_id == attempt.word_id) {
                Some(index) => index,
                None => {
                    words.push(WordResult {
                        word_id: attempt.word_id,
                        word: attempt.word.clone(),
                        spelling: None,
                        pos: None,
                        sentences: None,
                    });
                    words.len() - 1
                }
            };
            let slot = match attempt.category {
                StarCategory::Spelling => &mut words[index].spelling,
                StarCategory::Pos => &mut words[index].pos,
                StarCategory::Sentences => &mut words[index].sentences,
            };
            *slot = Some(attempt.correct);
        }

        ChallengeReport {
            summary: self.summary(),
            categories,
            words,
            retry_words: self.missed().len(),
            is_retry: self.is_retry,
        }
    }

    /// Restart over the missed words, reshuffled.
    ///
    /// Words are taken from `current_words` so edits and deletions made
    /// since the run started are respected. Returns `false`, leaving the
    /// results in place, when nothing is left to retry.
    pub fn retry<R: Rng + ?Sized>(&mut self, current_words: &[Word], rng: &mut R) -> bool {
        if self.stage != Stage::Results {
            return false;
        }
        let missed = self.missed();
        let mut words: Vec<Word> = current_words
            .iter()
            .filter(|w| missed.contains(&w.id) && w.is_tagged())
            .cloned()
            .collect();
        if words.is_empty() {
            return false;
        }
        words.shuffle(rng);
        *self = Self::over(words, true);
        true
    }
}

fn following(category: StarCategory) -> Option<StarCategory> {
    match category {
        StarCategory::Spelling => Some(StarCategory::Pos),
        StarCategory::Pos => Some(StarCategory::Sentences),
        StarCategory::Sentences => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use wordjar_ai::SuffixPosGuesser;

    fn words() -> Vec<Word> {
        [
            ("cat", PartOfSpeech::Noun),
            ("run", PartOfSpeech::Verb),
            ("red", PartOfSpeech::Adjective),
        ]
        .into_iter()
        .map(|(w, pos)| {
            let mut word = Word::new(w, "");
            word.pos = Some(pos);
            word
        })
        .collect()
    }

    fn right_answer(category: StarCategory, word: &Word) -> Answer {
        match category {
            StarCategory::Spelling => Answer::Spelling(word.word.clone()),
            StarCategory::Pos => Answer::Pos(word.pos.unwrap()),
            StarCategory::Sentences => Answer::Sentence(format!("My {} is here.", word.word)),
        }
    }

    /// Answer every question with `answer_for`.
    fn play_with<F>(game: &mut ChallengeGame, mut answer_for: F) -> Vec<Effect>
    where
        F: FnMut(StarCategory, &Word) -> Answer,
    {
        let mut last = Vec::new();
        while game.stage() != Stage::Results {
            match game.stage() {
                Stage::Intro(_) => game.begin(),
                Stage::Question(category) => {
                    let word = game.current().cloned().unwrap();
                    assert!(game.answer(answer_for(category, &word)).outcome.is_some());
                    last = game.next();
                }
                Stage::Results => unreachable!(),
            }
        }
        last
    }

    /// Answer every question; `miss` gets a wrong spelling.
    fn play(game: &mut ChallengeGame, miss: &str) -> Vec<Effect> {
        play_with(game, |category, word| match category {
            StarCategory::Spelling if word.word == miss => Answer::Spelling("nope".into()),
            _ => right_answer(category, word),
        })
    }

    #[test]
    fn test_phases_run_in_order_over_same_words() {
        let mut rng = StdRng::seed_from_u64(42);
        let (mut game, effects) = ChallengeGame::start(&words(), &SuffixPosGuesser, &mut rng).unwrap();
        assert!(effects.is_empty());
        assert_eq!(game.stage(), Stage::Intro(StarCategory::Spelling));
        assert_eq!(game.current(), None);

        game.begin();
        let order: Vec<String> = game.round().words().iter().map(|w| w.word.clone()).collect();
        for _ in 0..3 {
            let word = game.current().cloned().unwrap();
            game.answer(Answer::Spelling(word.word));
            game.next();
        }
        assert_eq!(game.stage(), Stage::Intro(StarCategory::Pos));
        let pos_order: Vec<String> = game.round().words().iter().map(|w| w.word.clone()).collect();
        assert_eq!(order, pos_order);
    }

    #[test]
    fn test_answer_for_wrong_phase_is_ignored() {
        let mut rng = StdRng::seed_from_u64(1);
        let (mut game, _) = ChallengeGame::start(&words(), &SuffixPosGuesser, &mut rng).unwrap();
        assert_eq!(game.answer(Answer::Spelling("cat".into())).outcome, None);
        game.begin();
        assert_eq!(game.answer(Answer::Pos(PartOfSpeech::Noun)).outcome, None);
        assert!(game.attempts().next().is_none());
    }

    #[test]
    fn test_perfect_run_report() {
        let mut rng = StdRng::seed_from_u64(2);
        let (mut game, _) = ChallengeGame::start(&words(), &SuffixPosGuesser, &mut rng).unwrap();
        let effects = play(&mut game, "");
        assert_eq!(effects, vec![Effect::Celebrate]);

        let report = game.report();
        assert_eq!(report.summary.total, 9);
        assert_eq!(report.summary.percent, 100);
        assert!(report.categories.iter().all(|c| c.correct == 3 && c.total == 3));
        assert_eq!(report.words.len(), 3);
        assert_eq!(report.retry_words, 0);
        assert!(!report.is_retry);
        assert!(!game.retry(&words(), &mut rng));
        assert_eq!(game.stage(), Stage::Results);
    }

    #[test]
    fn test_retry_covers_missed_words() {
        let mut rng = StdRng::seed_from_u64(3);
        let words = words();
        let (mut game, _) = ChallengeGame::start(&words, &SuffixPosGuesser, &mut rng).unwrap();
        play(&mut game, "run");

        let report = game.report();
        assert_eq!(report.summary.correct, 8);
        assert_eq!(report.summary.percent, 89);
        assert_eq!(report.categories[0], CategoryScore { category: StarCategory::Spelling, correct: 2, total: 3 });
        let run = report.words.iter().find(|w| w.word == "run").unwrap();
        assert_eq!((run.spelling, run.pos, run.sentences), (Some(false), Some(true), Some(true)));
        assert_eq!(report.retry_words, 1);

        assert!(game.retry(&words, &mut rng));
        assert!(game.is_retry());
        assert_eq!(game.stage(), Stage::Intro(StarCategory::Spelling));
        assert_eq!(game.round().len(), 1);
        assert_eq!(game.round().words()[0].word, "run");
        assert!(game.attempts().next().is_none());

        play(&mut game, "");
        assert!(game.report().is_retry);
    }

    #[test]
    fn test_retry_skips_deleted_words() {
        let mut rng = StdRng::seed_from_u64(4);
        let words = words();
        let (mut game, _) = ChallengeGame::start(&words, &SuffixPosGuesser, &mut rng).unwrap();
        play(&mut game, "cat");
        let remaining: Vec<Word> = words.into_iter().filter(|w| w.word != "cat").collect();
        assert!(!game.retry(&remaining, &mut rng));
    }

    #[test]
    fn test_word_missed_twice_is_retried_once() {
        let mut rng = StdRng::seed_from_u64(6);
        let words = words();
        let (mut game, _) = ChallengeGame::start(&words, &SuffixPosGuesser, &mut rng).unwrap();
        play_with(&mut game, |category, word| match category {
            StarCategory::Spelling if word.word == "red" => Answer::Spelling("rad".into()),
            StarCategory::Pos if word.word == "red" => Answer::Pos(PartOfSpeech::Verb),
            _ => right_answer(category, word),
        });

        let report = game.report();
        assert_eq!(report.summary.correct, 7);
        assert_eq!(report.retry_words, 1);
        let red = report.words.iter().find(|w| w.word == "red").unwrap();
        assert_eq!((red.spelling, red.pos, red.sentences), (Some(false), Some(false), Some(true)));

        assert!(game.retry(&words, &mut rng));
        assert_eq!(game.round().len(), 1);
        assert_eq!(game.round().words()[0].word, "red");
    }

    #[test]
    fn test_unanswered_question_blocks_next() {
        let mut rng = StdRng::seed_from_u64(7);
        let (mut game, _) = ChallengeGame::start(&words(), &SuffixPosGuesser, &mut rng).unwrap();
        game.begin();
        let first = game.current().cloned().unwrap();
        assert!(game.next().is_empty());
        assert_eq!(game.current(), Some(&first));
        assert_eq!(game.stage(), Stage::Question(StarCategory::Spelling));
        assert_eq!(game.summary().total, 0);
    }

    #[test]
    fn test_missing_word_sentence_is_not_recorded() {
        let mut rng = StdRng::seed_from_u64(5);
        let (mut game, _) = ChallengeGame::start(&words(), &SuffixPosGuesser, &mut rng).unwrap();
        for category in [StarCategory::Spelling, StarCategory::Pos] {
            game.begin();
            while let Some(word) = game.current().cloned() {
                game.answer(right_answer(category, &word));
                game.next();
            }
        }
        game.begin();
        assert_eq!(game.stage(), Stage::Question(StarCategory::Sentences));
        let word = game.current().cloned().unwrap();
        let turn = game.answer(Answer::Sentence("banana is tasty.".into()));
        assert_eq!(turn.outcome, Some(Feedback::Sentence(SentenceFeedback::MissingWord)));
        assert!(!game.round().is_answered());

        assert!(game.next().is_empty());
        assert_eq!(game.current(), Some(&word));
        assert_eq!(game.stage(), Stage::Question(StarCategory::Sentences));
    }
}
