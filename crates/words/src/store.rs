//! Word store.

use std::sync::Arc;
use tracing::info;
use wordjar_core::{normalize_word, PartOfSpeech, Word, WordId};
use wordjar_progress::ProgressTracker;
use wordjar_storage::{Storage, StorageError};

/// Result type for word operations.
pub type Result<T> = std::result::Result<T, WordError>;

/// Errors from word operations. The validation variants are meant to be
/// shown to the user, not propagated.
#[derive(Debug, thiserror::Error)]
pub enum WordError {
    /// Nothing left after trimming
    #[error("Word is empty")]
    EmptyWord,

    /// Another entry already has this spelling
    #[error("\"{0}\" is already in the list")]
    DuplicateWord(String),

    /// No word with this id
    #[error("Word not found: {0}")]
    NotFound(WordId),

    /// Storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Changes applied by [`WordStore::update`]. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordUpdate {
    /// New spelling (normalized before saving)
    pub word: Option<String>,

    /// New meaning
    pub meaning: Option<String>,

    /// New part of speech; `Some(None)` clears the tag
    pub pos: Option<Option<PartOfSpeech>>,

    /// New example sentence
    pub example: Option<String>,
}

/// Outcome of a bulk add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkAddReport {
    /// Words added
    pub added: Vec<String>,

    /// Lines rejected as empty or duplicate
    pub rejected: Vec<String>,
}

/// Owns the word list. Deleting a word also deletes its stars.
pub struct WordStore<S: Storage + ?Sized> {
    storage: Arc<S>,
    progress: Arc<dyn ProgressTracker>,
}

impl<S: Storage + ?Sized> Clone for WordStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            progress: Arc::clone(&self.progress),
        }
    }
}

impl<S: Storage + ?Sized> WordStore<S> {
    /// Create a word store. `progress` receives delete cascades.
    pub fn new(storage: Arc<S>, progress: Arc<dyn ProgressTracker>) -> Self {
        Self { storage, progress }
    }

    /// Every word, in insertion order.
    pub async fn list(&self) -> Result<Vec<Word>> {
        Ok(self.storage.load_words().await?)
    }

    /// Word by id.
    pub async fn get(&self, id: WordId) -> Result<Option<Word>> {
        Ok(self.list().await?.into_iter().find(|w| w.id == id))
    }

    /// Word by spelling (normalized before matching).
    pub async fn find(&self, word: &str) -> Result<Option<Word>> {
        let word = normalize_word(word);
        Ok(self.list().await?.into_iter().find(|w| w.word == word))
    }

    /// Add a word. The word is trimmed and lowercased, the meaning trimmed.
    pub async fn add(&self, word: &str, meaning: &str) -> Result<Word> {
        let mut words = self.list().await?;
        let entry = new_entry(&words, word, meaning)?;
        words.push(entry.clone());
        self.storage.save_words(&words).await?;
        info!("Added word {:?}", entry.word);
        Ok(entry)
    }

    /// Add one word per non-blank line of `text`. See [`parse_bulk_line`].
    pub async fn add_bulk(&self, text: &str) -> Result<BulkAddReport> {
        let mut words = self.list().await?;
        let mut report = BulkAddReport::default();

        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let (word, meaning) = parse_bulk_line(line);
            match new_entry(&words, word, meaning) {
                Ok(entry) => {
                    report.added.push(entry.word.clone());
                    words.push(entry);
                }
                Err(_) => report.rejected.push(line.trim().to_string()),
            }
        }

        if !report.added.is_empty() {
            self.storage.save_words(&words).await?;
            info!("Bulk added {} words ({} rejected)", report.added.len(), report.rejected.len());
        }
        Ok(report)
    }

    /// Apply `changes` to a word.
    pub async fn update(&self, id: WordId, changes: WordUpdate) -> Result<Word> {
        let mut words = self.list().await?;

        if let Some(raw) = &changes.word {
            let spelling = normalize_word(raw);
            if spelling.is_empty() {
                return Err(WordError::EmptyWord);
            }
            if words.iter().any(|w| w.id != id && w.word == spelling) {
                return Err(WordError::DuplicateWord(spelling));
            }
        }

        let entry = words
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(WordError::NotFound(id))?;

        if let Some(raw) = changes.word {
            entry.word = normalize_word(&raw);
        }
        if let Some(meaning) = changes.meaning {
            entry.meaning = meaning.trim().to_string();
        }
        if let Some(pos) = changes.pos {
            entry.pos = pos;
        }
        if let Some(example) = changes.example {
            entry.example = example.trim().to_string();
        }

        let updated = entry.clone();
        self.storage.save_words(&words).await?;
        Ok(updated)
    }

    /// Tag a word's part of speech.
    pub async fn set_pos(&self, id: WordId, pos: PartOfSpeech) -> Result<Word> {
        self.update(id, WordUpdate { pos: Some(Some(pos)), ..Default::default() }).await
    }

    /// Delete a word and its progress record. Returns the removed word.
    pub async fn remove(&self, id: WordId) -> Result<Option<Word>> {
        let mut words = self.list().await?;
        let Some(index) = words.iter().position(|w| w.id == id) else {
            return Ok(None);
        };
        let removed = words.remove(index);
        self.storage.save_words(&words).await?;
        self.progress.remove_word(id).await?;
        info!("Removed word {:?}", removed.word);
        Ok(Some(removed))
    }

    /// Wipe words, progress, streak and settings.
    pub async fn reset_all(&self) -> Result<()> {
        self.storage.reset_all().await?;
        info!("Reset all data");
        Ok(())
    }
}

fn new_entry(existing: &[Word], word: &str, meaning: &str) -> Result<Word> {
    let word = normalize_word(word);
    if word.is_empty() {
        return Err(WordError::EmptyWord);
    }
    if existing.iter().any(|w| w.word == word) {
        return Err(WordError::DuplicateWord(word));
    }
    Ok(Word::new(word, meaning.trim()))
}

/// Split a bulk-add line into word and meaning.
///
/// `word, meaning` splits on the first comma; otherwise `word - meaning`
/// splits on the first ` - `; otherwise the whole line is the word.
pub fn parse_bulk_line(line: &str) -> (&str, &str) {
    if let Some((word, meaning)) = line.split_once(',') {
        (word.trim(), meaning.trim())
    } else if let Some((word, meaning)) = line.split_once(" - ") {
        (word.trim(), meaning.trim())
    } else {
        (line.trim(), "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordjar_core::StarCategory;
    use wordjar_progress::ProgressStore;
    use wordjar_storage::MemoryStorage;

    fn stores() -> (WordStore<MemoryStorage>, Arc<ProgressStore<MemoryStorage>>) {
        let storage = Arc::new(MemoryStorage::new());
        let progress = Arc::new(ProgressStore::new(storage.clone()));
        (WordStore::new(storage, progress.clone()), progress)
    }

    #[tokio::test]
    async fn test_add_normalizes() {
        let (words, _) = stores();
        let word = words.add("  Apple ", " 사과 ").await.unwrap();
        assert_eq!(word.word, "apple");
        assert_eq!(word.meaning, "사과");
        assert_eq!(word.pos, None);
        assert_eq!(words.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_rejects_empty_and_duplicate() {
        let (words, _) = stores();
        assert!(matches!(words.add("   ", "x").await, Err(WordError::EmptyWord)));
        words.add("cat", "").await.unwrap();
        assert!(matches!(words.add("CAT", "고양이").await, Err(WordError::DuplicateWord(w)) if w == "cat"));
        assert_eq!(words.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_bulk_add_formats() {
        let (words, _) = stores();
        let report = words
            .add_bulk("apple, 사과, 과일\nrun - 달리다\n\nblue\napple\n")
            .await
            .unwrap();
        assert_eq!(report.added, vec!["apple", "run", "blue"]);
        assert_eq!(report.rejected, vec!["apple"]);

        let apple = words.find("apple").await.unwrap().unwrap();
        assert_eq!(apple.meaning, "사과, 과일");
        let run = words.find("run").await.unwrap().unwrap();
        assert_eq!(run.meaning, "달리다");
    }

    #[test]
    fn test_parse_bulk_line() {
        assert_eq!(parse_bulk_line("a, b, c"), ("a", "b, c"));
        assert_eq!(parse_bulk_line("well-known - 잘 알려진"), ("well-known", "잘 알려진"));
        assert_eq!(parse_bulk_line(" solo "), ("solo", ""));
    }

    #[tokio::test]
    async fn test_update_fields() {
        let (words, _) = stores();
        let word = words.add("dog", "").await.unwrap();
        let updated = words
            .update(
                word.id,
                WordUpdate {
                    word: Some("Dogs ".into()),
                    meaning: Some(" 개 ".into()),
                    pos: Some(Some(PartOfSpeech::Noun)),
                    example: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.word, "dogs");
        assert_eq!(updated.meaning, "개");
        assert_eq!(updated.pos, Some(PartOfSpeech::Noun));
        assert_eq!(words.get(word.id).await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_rejects_rename_onto_existing() {
        let (words, _) = stores();
        words.add("cat", "").await.unwrap();
        let dog = words.add("dog", "").await.unwrap();
        let result = words
            .update(dog.id, WordUpdate { word: Some("cat".into()), ..Default::default() })
            .await;
        assert!(matches!(result, Err(WordError::DuplicateWord(_))));
        assert!(matches!(
            words.update(WordId::new(), WordUpdate::default()).await,
            Err(WordError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_cascades_to_progress() {
        let (words, progress) = stores();
        let word = words.add("sun", "해").await.unwrap();
        progress.add_star(word.id, StarCategory::Spelling).await.unwrap();

        let removed = words.remove(word.id).await.unwrap();
        assert_eq!(removed.map(|w| w.word), Some("sun".to_string()));
        assert_eq!(progress.word_stars(word.id).await.unwrap().total(), 0);
        assert!(progress.all().await.unwrap().is_empty());
        assert!(words.remove(word.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reset_all() {
        let (words, progress) = stores();
        let word = words.add("moon", "").await.unwrap();
        progress.add_star(word.id, StarCategory::Pos).await.unwrap();
        words.reset_all().await.unwrap();
        assert!(words.list().await.unwrap().is_empty());
        assert!(progress.all().await.unwrap().is_empty());
    }
}
