//! AI-fill: complete a word's meaning, part of speech and example.

use std::sync::Arc;
use tracing::{info, warn};
use wordjar_ai::{PosGuesser, WordLookup};
use wordjar_core::{PartOfSpeech, Word, WordId};
use wordjar_storage::Storage;
use crate::store::{Result, WordError, WordStore, WordUpdate};

/// Where filled details came from. The first source that contributed
/// anything wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillSource {
    /// Built-in dictionary
    Dictionary,
    /// Remote assistant
    Remote,
    /// Suffix-based part-of-speech guess
    Guess,
}

/// Details collected for a word, with blanks left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillDraft {
    /// Meaning
    pub meaning: String,
    /// Part of speech
    pub pos: Option<PartOfSpeech>,
    /// Example sentence
    pub example: String,
}

impl FillDraft {
    fn from_word(word: &Word) -> Self {
        Self {
            meaning: word.meaning.clone(),
            pos: word.pos,
            example: word.example.clone(),
        }
    }

    fn differs_from(&self, word: &Word) -> bool {
        (!self.meaning.is_empty() && self.meaning != word.meaning)
            || (self.pos.is_some() && self.pos != word.pos)
            || (!self.example.is_empty() && self.example != word.example)
    }
}

/// Result of [`WordFiller::fill`].
#[derive(Debug, Clone, PartialEq)]
pub enum FillOutcome {
    /// New details were saved
    Filled {
        /// Updated word
        word: Word,
        /// Source credited for the change
        source: FillSource,
    },

    /// Meaning, part of speech and example were already set
    AlreadyComplete,

    /// Nothing new was found; the user should fill in the rest by hand,
    /// starting from `prefill`
    NeedsManualEntry {
        /// Whatever was collected
        prefill: FillDraft,
    },
}

/// Fills in missing word details from a dictionary, an optional remote
/// lookup and a part-of-speech guesser.
pub struct WordFiller {
    dictionary: Arc<dyn WordLookup>,
    remote: Option<Arc<dyn WordLookup>>,
    guesser: Arc<dyn PosGuesser>,
}

impl WordFiller {
    /// Create a filler. `remote` is `None` when AI assistance is off.
    pub fn new(
        dictionary: Arc<dyn WordLookup>,
        remote: Option<Arc<dyn WordLookup>>,
        guesser: Arc<dyn PosGuesser>,
    ) -> Self {
        Self { dictionary, remote, guesser }
    }

    /// Collect details for `word` without saving anything.
    pub async fn draft(&self, word: &Word) -> (FillDraft, Option<FillSource>) {
        let mut draft = FillDraft::from_word(word);
        let mut source = None;

        // Dictionary only fills blanks.
        match self.dictionary.lookup(&word.word).await {
            Ok(Some(info)) => {
                if draft.meaning.is_empty() {
                    if let Some(meaning) = info.meaning {
                        draft.meaning = meaning;
                    }
                }
                if draft.pos.is_none() {
                    draft.pos = info.pos;
                }
                if draft.example.is_empty() {
                    if let Some(example) = info.example {
                        draft.example = example;
                    }
                }
                source = Some(FillSource::Dictionary);
            }
            Ok(None) => {}
            Err(e) => warn!("Dictionary lookup for {:?} failed: {}", word.word, e),
        }

        // Remote answers overwrite.
        if let Some(remote) = &self.remote {
            match remote.lookup(&word.word).await {
                Ok(Some(info)) if !info.is_empty() => {
                    if let Some(meaning) = info.meaning {
                        draft.meaning = meaning;
                    }
                    if let Some(pos) = info.pos {
                        draft.pos = Some(pos);
                    }
                    if let Some(example) = info.example {
                        draft.example = example;
                    }
                    source.get_or_insert(FillSource::Remote);
                }
                Ok(_) => {}
                Err(e) => warn!("AI lookup for {:?} failed: {}", word.word, e),
            }
        }

        if draft.pos.is_none() {
            draft.pos = self.guesser.guess_pos(&word.word);
            if draft.pos.is_some() {
                source.get_or_insert(FillSource::Guess);
            }
        }

        (draft, source)
    }

    /// Fill in the word with `id` and save whatever changed.
    pub async fn fill<S>(&self, store: &WordStore<S>, id: WordId) -> Result<FillOutcome>
    where
        S: Storage + ?Sized,
    {
        let word = store.get(id).await?.ok_or(WordError::NotFound(id))?;
        let (draft, source) = self.draft(&word).await;

        if draft.differs_from(&word) {
            let changes = WordUpdate {
                word: None,
                meaning: Some(draft.meaning),
                pos: Some(draft.pos),
                example: Some(draft.example),
            };
            let updated = store.update(id, changes).await?;
            let source = source.unwrap_or(FillSource::Remote);
            info!("Filled details for {:?} from {:?}", updated.word, source);
            return Ok(FillOutcome::Filled { word: updated, source });
        }

        if !word.meaning.is_empty() && word.pos.is_some() && !word.example.is_empty() {
            return Ok(FillOutcome::AlreadyComplete);
        }

        Ok(FillOutcome::NeedsManualEntry { prefill: draft })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use wordjar_ai::{AssistError, StaticDictionary, SuffixPosGuesser};
    use wordjar_core::WordInfo;
    use wordjar_progress::ProgressStore;
    use wordjar_storage::MemoryStorage;

    struct Remote(Option<WordInfo>);

    #[async_trait]
    impl WordLookup for Remote {
        async fn lookup(&self, _word: &str) -> wordjar_ai::Result<Option<WordInfo>> {
            Ok(self.0.clone())
        }
    }

    struct Offline;

    #[async_trait]
    impl WordLookup for Offline {
        async fn lookup(&self, _word: &str) -> wordjar_ai::Result<Option<WordInfo>> {
            Err(AssistError::Api("API key not configured".into()))
        }
    }

    fn store() -> WordStore<MemoryStorage> {
        let storage = Arc::new(MemoryStorage::new());
        let progress = Arc::new(ProgressStore::new(storage.clone()));
        WordStore::new(storage, progress)
    }

    fn dictionary() -> Arc<dyn WordLookup> {
        Arc::new(StaticDictionary::from_entries([(
            "apple",
            WordInfo {
                meaning: Some("사과".into()),
                pos: Some(PartOfSpeech::Noun),
                example: Some("I eat an apple.".into()),
            },
        )]))
    }

    #[tokio::test]
    async fn test_dictionary_fills_blanks_only() {
        let words = store();
        let apple = words.add("apple", "빨간 과일").await.unwrap();
        let filler = WordFiller::new(dictionary(), None, Arc::new(SuffixPosGuesser));

        match filler.fill(&words, apple.id).await.unwrap() {
            FillOutcome::Filled { word, source } => {
                assert_eq!(source, FillSource::Dictionary);
                assert_eq!(word.meaning, "빨간 과일");
                assert_eq!(word.pos, Some(PartOfSpeech::Noun));
                assert_eq!(word.example, "I eat an apple.");
            }
            other => panic!("unexpected: {:?}", other),
        }

        assert_eq!(
            filler.fill(&words, apple.id).await.unwrap(),
            FillOutcome::AlreadyComplete
        );
    }

    #[tokio::test]
    async fn test_remote_overwrites() {
        let words = store();
        let run = words.add("run", "뛰다").await.unwrap();
        let remote = Remote(Some(WordInfo {
            meaning: Some("달리다".into()),
            pos: Some(PartOfSpeech::Verb),
            example: None,
        }));
        let filler = WordFiller::new(dictionary(), Some(Arc::new(remote)), Arc::new(SuffixPosGuesser));

        match filler.fill(&words, run.id).await.unwrap() {
            FillOutcome::Filled { word, source } => {
                assert_eq!(source, FillSource::Remote);
                assert_eq!(word.meaning, "달리다");
                assert_eq!(word.pos, Some(PartOfSpeech::Verb));
                assert_eq!(word.example, "");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_guess_when_remote_fails() {
        let words = store();
        let quickly = words.add("quickly", "").await.unwrap();
        let filler = WordFiller::new(dictionary(), Some(Arc::new(Offline)), Arc::new(SuffixPosGuesser));

        match filler.fill(&words, quickly.id).await.unwrap() {
            FillOutcome::Filled { word, source } => {
                assert_eq!(source, FillSource::Guess);
                assert_eq!(word.pos, Some(PartOfSpeech::Adverb));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_nothing_found_needs_manual_entry() {
        let words = store();
        let cat = words.add("cat", "고양이").await.unwrap();
        let filler = WordFiller::new(dictionary(), Some(Arc::new(Remote(None))), Arc::new(SuffixPosGuesser));

        match filler.fill(&words, cat.id).await.unwrap() {
            FillOutcome::NeedsManualEntry { prefill } => {
                assert_eq!(prefill.meaning, "고양이");
                assert_eq!(prefill.pos, None);
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(
            filler.fill(&words, WordId::new()).await,
            Err(WordError::NotFound(_))
        ));
    }
}
