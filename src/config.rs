//! Game configuration
//!
//! Built by the CLI from its flags; every field has a default so the library
//! can be used without one.

use crate::daily::FileStore;
use crate::daily::storage::stored_language;
use crate::wordlists::{DirectorySource, EmbeddedSource, Language, ListVariant, VocabularySource};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Letters per word when nothing else is requested
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Directory holding the persisted state
pub const DEFAULT_DATA_DIR: &str = ".wordle_daily";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Language to play; `None` restores the last one used
    pub language: Option<Language>,
    /// List random and daily words are drawn from
    pub variant: ListVariant,
    /// Letters per word
    pub word_length: usize,
    /// Rows per game; `None` means one more than the word length
    pub attempts: Option<usize>,
    /// Directory with `<code>.txt` lists, instead of the embedded ones
    pub vocab_dir: Option<PathBuf>,
    /// Where the key-value store lives
    pub data_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: None,
            variant: ListVariant::Full,
            word_length: DEFAULT_WORD_LENGTH,
            attempts: None,
            vocab_dir: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl GameConfig {
    /// Rows for a game on `word`
    #[must_use]
    pub fn attempts_for(&self, word: &str) -> usize {
        self.attempts
            .unwrap_or_else(|| word.chars().count() + 1)
            .max(1)
    }

    /// File backing the key-value store
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join("storage.json")
    }

    /// The requested language, or else the last one saved in the store
    ///
    /// The store is only read; an unreadable one yields the default.
    #[must_use]
    pub fn resolve_language(&self) -> Language {
        self.language.unwrap_or_else(|| match FileStore::open(self.storage_path()) {
            Ok(store) => stored_language(&store),
            Err(err) => {
                warn!(error = %err, "could not read saved language");
                Language::default()
            }
        })
    }

    /// Where vocabularies are fetched from
    #[must_use]
    pub fn source(&self) -> Arc<dyn VocabularySource + Send + Sync> {
        match &self.vocab_dir {
            Some(dir) => Arc::new(DirectorySource::new(dir.clone())),
            None => Arc::new(EmbeddedSource),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempts_default_to_word_length_plus_one() {
        let config = GameConfig::default();
        assert_eq!(config.attempts_for("TERMO"), 6);
        assert_eq!(config.attempts_for("VERÃO"), 6);
        assert_eq!(config.attempts_for("BANANA"), 7);
    }

    #[test]
    fn attempts_override_is_at_least_one() {
        let config = GameConfig {
            attempts: Some(0),
            ..GameConfig::default()
        };
        assert_eq!(config.attempts_for("TERMO"), 1);
    }

    #[test]
    fn language_falls_back_to_last_saved() {
        use crate::daily::KeyValueStore;
        use crate::daily::storage::LANGUAGE_KEY;

        let dir = tempfile::tempdir().unwrap();
        let mut config = GameConfig {
            data_dir: dir.path().to_path_buf(),
            ..GameConfig::default()
        };
        assert_eq!(config.resolve_language(), Language::default());

        let mut store = FileStore::open(config.storage_path()).unwrap();
        store.set(LANGUAGE_KEY, "en-us".to_string()).unwrap();
        assert_eq!(config.resolve_language(), Language::EnUs);

        config.language = Some(Language::Fr);
        assert_eq!(config.resolve_language(), Language::Fr);
    }

    #[test]
    fn unreadable_store_yields_default_language() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig {
            data_dir: dir.path().to_path_buf(),
            ..GameConfig::default()
        };
        std::fs::write(config.storage_path(), "{\"language\": \"fr\"").unwrap();

        assert_eq!(config.resolve_language(), Language::default());
        assert!(config.storage_path().exists());
    }

    #[test]
    fn storage_lives_in_data_dir() {
        let config = GameConfig {
            data_dir: PathBuf::from("/tmp/wd"),
            ..GameConfig::default()
        };
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/wd/storage.json"));
    }
}
