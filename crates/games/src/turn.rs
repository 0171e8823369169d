//! Outcome of a game transition.

use crate::Effect;

/// What a transition produced: feedback for the learner and the effects
/// the outside world should carry out.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn<T> {
    /// Feedback to show
    pub outcome: T,

    /// Effects to run, in order
    pub effects: Vec<Effect>,
}

impl<T> Turn<T> {
    /// A turn with no effects.
    pub fn new(outcome: T) -> Self {
        Self { outcome, effects: Vec::new() }
    }

    /// A turn with effects.
    pub fn with(outcome: T, effects: Vec<Effect>) -> Self {
        Self { outcome, effects }
    }
}
