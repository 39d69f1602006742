//! Key-value string storage
//!
//! The game keeps two kinds of entries: the selected language, and one
//! serialized challenge record per language.

use crate::wordlists::Language;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Key holding the selected language code
pub const LANGUAGE_KEY: &str = "language";

/// Key holding a language's daily challenge record
#[must_use]
pub fn challenge_key(language: Language) -> String {
    format!("daily-challenge-{}", language.code())
}

/// Language saved under [`LANGUAGE_KEY`], or the default
#[must_use]
pub fn stored_language<S: KeyValueStore + ?Sized>(store: &S) -> Language {
    match store.get(LANGUAGE_KEY) {
        Ok(Some(code)) => Language::from_code(&code).unwrap_or_default(),
        Ok(None) => Language::default(),
        Err(err) => {
            warn!(error = %err, "could not read selected language");
            Language::default()
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("storage format error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// String store keyed by string
pub trait KeyValueStore {
    /// # Errors
    /// Returns `StorageError` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    /// Returns `StorageError` if the backing store cannot be written.
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// # Errors
    /// Returns `StorageError` if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Process-local store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk
///
/// The whole file is rewritten on every change. One writer per file is
/// assumed.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store, starting empty when the file does not exist yet
    ///
    /// # Errors
    /// Returns `StorageError` if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self { path, entries })
    }

    /// Open a store, setting an unreadable file aside and starting empty
    ///
    /// A file that fails to parse is renamed to `<name>.corrupt` next to it.
    ///
    /// # Errors
    /// Returns `StorageError::Io` if the file exists but cannot be read.
    pub fn open_or_reset(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        match Self::open(&path) {
            Err(StorageError::Serde(err)) => {
                let backup = sibling(&path, "corrupt");
                warn!(path = %path.display(), error = %err, "unreadable storage, starting over");
                if let Err(err) = fs::rename(&path, &backup) {
                    warn!(path = %backup.display(), error = %err, "could not set storage aside");
                }
                Ok(Self {
                    path,
                    entries: BTreeMap::new(),
                })
            }
            other => other,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a sibling `.tmp` file, then rename it over the store
    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        let staging = sibling(&self.path, "tmp");
        fs::write(&staging, content)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

/// `storage.json` becomes `storage.json.<suffix>` in the same directory
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
