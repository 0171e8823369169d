//! Wiring of stores and assistants for one CLI session.

use std::path::Path;
use std::sync::Arc;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;
use wordjar_ai::{AssistConfig, AssistantLookup, GuardedAssistant, StaticDictionary, SuffixPosGuesser, WordLookup};
use wordjar_games::EffectApplier;
use wordjar_progress::{ProgressStore, StatsCollector, StreakTracker};
use wordjar_storage::{JsonStorage, Storage};
use wordjar_words::{WordFiller, WordStore};

const BUILTIN_DICTIONARY: &str = include_str!("../data/dictionary.json");

/// Everything a command needs.
pub struct App {
    pub storage: Arc<JsonStorage>,
    pub words: WordStore<JsonStorage>,
    pub stats: StatsCollector<JsonStorage>,
    pub streak: StreakTracker<JsonStorage>,
    pub assistant: Arc<GuardedAssistant>,
    pub dictionary: Arc<StaticDictionary>,
    pub guesser: SuffixPosGuesser,
    pub applier: EffectApplier<JsonStorage>,
    pub rng: StdRng,
}

impl App {
    /// Open the data directory and build the stores over it.
    pub async fn open(data_dir: &Path, config: AssistConfig) -> Result<Self> {
        let storage = Arc::new(JsonStorage::new(data_dir).await?);
        let progress = Arc::new(ProgressStore::new(storage.clone()));
        let words = WordStore::new(storage.clone(), progress.clone());

        let settings = storage.load_settings().await?;
        let assistant = Arc::new(GuardedAssistant::from_settings(&settings, config));

        let dictionary = match StaticDictionary::from_json(BUILTIN_DICTIONARY) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                warn!("Built-in dictionary unreadable: {}", e);
                StaticDictionary::default()
            }
        };

        Ok(Self {
            stats: StatsCollector::new(storage.clone()),
            streak: StreakTracker::new(storage.clone()),
            applier: EffectApplier::new(progress.clone(), words.clone()),
            storage,
            words,
            assistant,
            dictionary: Arc::new(dictionary),
            guesser: SuffixPosGuesser,
            rng: StdRng::from_entropy(),
        })
    }

    /// Filler using the dictionary, the assistant when online, and the
    /// suffix guesser.
    pub fn filler(&self) -> WordFiller {
        let remote: Option<Arc<dyn WordLookup>> = if self.assistant.is_online() {
            Some(Arc::new(AssistantLookup(self.assistant.clone())))
        } else {
            None
        };
        WordFiller::new(self.dictionary.clone(), remote, Arc::new(self.guesser))
    }
}
