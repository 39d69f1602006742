//! Word normalization and representation
//!
//! A Word keeps the canonical (dictionary) spelling for display, and the
//! normalized letters used for every comparison: diacritics stripped and case
//! folded to uppercase.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Strip diacritics and fold case
///
/// Decomposes to NFD, drops combining marks, then uppercases.
///
/// # Examples
/// ```
/// use wordle_daily::core::normalize;
///
/// assert_eq!(normalize("verão"), "VERAO");
/// assert_eq!(normalize("Pêché"), "PECHE");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Exact comparison of two spellings, accents included
///
/// Canonically equivalent sequences (precomposed vs decomposed accents)
/// compare equal; case and diacritics are significant.
#[must_use]
pub fn same_spelling(a: &str, b: &str) -> bool {
    a.nfc().eq(b.nfc())
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

/// A dictionary word with its normalized letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    /// Create a new Word from any spelling
    ///
    /// The canonical text is NFC-composed and uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than letters and combining marks.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    ///
    /// let word = Word::new("verão").unwrap();
    /// assert_eq!(word.text(), "VERÃO");
    /// assert_eq!(word.key(), "VERAO");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text: String = text.as_ref().nfc().flat_map(char::to_uppercase).collect();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = normalize(&text).chars().collect();

        Ok(Self { text, letters })
    }

    /// Canonical spelling
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalized letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Normalized form as a string, the vocabulary lookup key
    #[must_use]
    pub fn key(&self) -> String {
        self.letters.iter().collect()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Normalized letter at a position
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }

    /// Count of each normalized letter
    ///
    /// Used for classification with duplicate letters.
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
