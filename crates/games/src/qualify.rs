//! Which words a game may ask about.

use wordjar_ai::PosGuesser;
use wordjar_core::Word;
use crate::{Effect, GameError, Result};

/// Words needed for a spelling or sentence round.
pub const MIN_WORDS: usize = 1;

/// Tagged words needed for a word-type quiz or a challenge.
pub const MIN_TAGGED_WORDS: usize = 3;

/// Every word, provided there is at least one.
pub fn any_words(words: &[Word]) -> Result<Vec<Word>> {
    if words.len() < MIN_WORDS {
        return Err(GameError::NotEnoughWords {
            needed: MIN_WORDS,
            found: words.len(),
            kind: "word",
        });
    }
    Ok(words.to_vec())
}

/// Words with a part-of-speech tag.
///
/// When fewer than [`MIN_TAGGED_WORDS`] are tagged, every untagged word is
/// run through `guesser` first. Each guess comes back as a
/// [`Effect::Retag`] so it can be saved, and is already applied to the
/// returned words.
pub fn tagged_words(words: &[Word], guesser: &dyn PosGuesser) -> Result<(Vec<Word>, Vec<Effect>)> {
    let mut candidates = words.to_vec();
    let mut effects = Vec::new();

    if candidates.iter().filter(|w| w.is_tagged()).count() < MIN_TAGGED_WORDS {
        for word in candidates.iter_mut().filter(|w| !w.is_tagged()) {
            if let Some(pos) = guesser.guess_pos(&word.word) {
                word.pos = Some(pos);
                effects.push(Effect::Retag { word_id: word.id, pos });
            }
        }
    }

    candidates.retain(Word::is_tagged);
    if candidates.len() < MIN_TAGGED_WORDS {
        return Err(GameError::NotEnoughWords {
            needed: MIN_TAGGED_WORDS,
            found: candidates.len(),
            kind: "words with word types",
        });
    }
    Ok((candidates, effects))
}
