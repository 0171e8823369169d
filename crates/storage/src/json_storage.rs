//! JSON file storage implementation.
//!
//! Stores each document as a pretty-printed JSON file under a data
//! directory (`words.json`, `progress.json`, `streak.json`,
//! `settings.json`). A document that fails to parse is logged and read
//! back as its default so a damaged file never locks the learner out.

use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tracing::{debug, warn};
use wordjar_core::{ProgressMap, Settings, StreakRecord, Word};
use super::{Result, Storage};

const WORDS: &str = "words";
const PROGRESS: &str = "progress";
const STREAK: &str = "streak";
const SETTINGS: &str = "settings";

/// File-based JSON storage backend.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    async fn read_document<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        let path = self.document_path(key);
        match read_json(&path).await {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Ok(T::default()),
            Err(super::StorageError::Json(e)) => {
                warn!("Ignoring unreadable {} document at {}: {}", key, path.display(), e);
                Ok(T::default())
            }
            Err(e) => Err(e),
        }
    }

    async fn write_document<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.document_path(key);
        let json = serde_json::to_string_pretty(value)?;

        // Write beside the target, then rename over it.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes()).await?;
        fs::rename(&tmp, &path).await?;

        debug!("Saved {} document", key);
        Ok(())
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn load_words(&self) -> Result<Vec<Word>> {
        self.read_document(WORDS).await
    }

    async fn save_words(&self, words: &[Word]) -> Result<()> {
        self.write_document(WORDS, words).await
    }

    async fn load_progress(&self) -> Result<ProgressMap> {
        self.read_document(PROGRESS).await
    }

    async fn save_progress(&self, progress: &ProgressMap) -> Result<()> {
        self.write_document(PROGRESS, progress).await
    }

    async fn load_streak(&self) -> Result<StreakRecord> {
        self.read_document(STREAK).await
    }

    async fn save_streak(&self, streak: &StreakRecord) -> Result<()> {
        self.write_document(STREAK, streak).await
    }

    async fn load_settings(&self) -> Result<Settings> {
        self.read_document(SETTINGS).await
    }

    async fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.write_document(SETTINGS, settings).await
    }

    async fn reset_all(&self) -> Result<()> {
        for key in [WORDS, PROGRESS, STREAK, SETTINGS] {
            fs::remove_file(self.document_path(key)).await.or_else(|e| {
                if e.kind() == std::io::ErrorKind::NotFound { Ok(()) } else { Err(e) }
            })?;
        }
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordjar_core::{AiProvider, StarRecord};

    #[tokio::test]
    async fn test_missing_documents_read_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();

        assert!(storage.load_words().await.unwrap().is_empty());
        assert!(storage.load_progress().await.unwrap().is_empty());
        assert_eq!(storage.load_streak().await.unwrap(), StreakRecord::default());
        assert_eq!(storage.load_settings().await.unwrap(), Settings::default());
    }

    #[tokio::test]
    async fn test_words_and_progress_persist() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();

        let word = Word::new("apple", "사과");
        storage.save_words(&[word.clone()]).await.unwrap();

        let mut progress = ProgressMap::new();
        progress.insert(word.id, StarRecord { spelling: 2, pos: 0, sentences: 1 });
        storage.save_progress(&progress).await.unwrap();

        // A second handle on the same directory sees the data.
        let reopened = JsonStorage::new(dir.path()).await.unwrap();
        assert_eq!(reopened.load_words().await.unwrap(), vec![word.clone()]);
        assert_eq!(reopened.load_progress().await.unwrap()[&word.id].spelling, 2);
    }

    #[tokio::test]
    async fn test_corrupt_document_reads_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        std::fs::write(dir.path().join("words.json"), "{not json").unwrap();

        assert!(storage.load_words().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reset_all_removes_documents() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();

        let settings = Settings { ai_enabled: false, ai_provider: AiProvider::Claude, api_key: String::new() };
        storage.save_settings(&settings).await.unwrap();
        storage.save_words(&[Word::new("cat", "")]).await.unwrap();

        storage.reset_all().await.unwrap();
        // Idempotent
        storage.reset_all().await.unwrap();

        assert!(storage.load_words().await.unwrap().is_empty());
        assert_eq!(storage.load_settings().await.unwrap(), Settings::default());
    }
}
