//! Normalized vocabulary index
//!
//! Words are keyed by their normalized form; each key keeps every original
//! spelling seen for it, in insertion order. Built once, never mutated.

use super::Language;
use crate::core::{RandomSource, Word, normalize};
use rustc_hash::FxHashMap;

/// Index of a language's word list
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    language: Language,
    index: FxHashMap<String, Vec<String>>,
    keys: Vec<String>,
}

impl Vocabulary {
    /// Index a word list
    ///
    /// Entries that are not words (blank lines, digits, punctuation) are
    /// skipped, so a malformed list yields an empty vocabulary.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::wordlists::{Language, Vocabulary};
    ///
    /// let vocab = Vocabulary::build(Language::PtBr, ["SABIA", "SABIÁ", "TERMO"]);
    /// assert_eq!(vocab.len(), 2);
    /// assert_eq!(vocab.lookup("sabiá"), Some("SABIA"));
    /// assert_eq!(vocab.spellings("sabia"), ["SABIA", "SABIÁ"]);
    /// ```
    pub fn build<I, S>(language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: FxHashMap<String, Vec<String>> = FxHashMap::default();
        let mut keys = Vec::new();

        for word in words {
            let spelling = word.as_ref().trim();
            if Word::new(spelling).is_err() {
                continue;
            }

            let key = normalize(spelling);
            let spellings = index.entry(key.clone()).or_insert_with(|| {
                keys.push(key);
                Vec::new()
            });

            if !spellings.iter().any(|s| s == spelling) {
                spellings.push(spelling.to_string());
            }
        }

        Self {
            language,
            index,
            keys,
        }
    }

    #[must_use]
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Number of distinct normalized words
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Normalized keys in insertion order
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Pick a word
    ///
    /// One draw selects the key, a second draw selects among its spellings.
    /// Returns `None` for an empty vocabulary.
    pub fn random_word<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.keys.is_empty() {
            return None;
        }

        let key = &self.keys[rng.next_index(self.keys.len())];
        let spellings = self.index.get(key)?;
        if spellings.is_empty() {
            return None;
        }

        Some(&spellings[rng.next_index(spellings.len())])
    }

    /// First spelling stored under the normalized form of `word`
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.spellings(word).first().map(String::as_str)
    }

    /// Every spelling stored under the normalized form of `word`
    #[must_use]
    pub fn spellings(&self, word: &str) -> &[String] {
        self.index
            .get(&normalize(word.trim()))
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(&normalize(word.trim()))
    }

    /// Iterate over every spelling
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.keys
            .iter()
            .filter_map(|key| self.index.get(key))
            .flatten()
            .map(String::as_str)
    }
}
