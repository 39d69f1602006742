//! Word list loading utilities
//!
//! Parses plain-text lists and provides the sources a game can fetch a
//! language's vocabulary from.

use super::{Language, ListVariant, Vocabulary, embedded_list};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Parse one word per line
///
/// Trailing whitespace is stripped, words are uppercased and composed, and
/// with `word_length` only words with exactly that many letters are kept.
/// Lines that are not words are skipped.
///
/// # Examples
/// ```
/// use wordle_daily::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("verão\r\ncasa\ntermo\n", Some(5));
/// assert_eq!(words, vec!["VERÃO", "TERMO"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str, word_length: Option<usize>) -> Vec<String> {
    words_from_lines(content.lines(), word_length)
}

/// Convert embedded lines to words, see [`parse_word_list`]
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: Option<usize>) -> Vec<String> {
    words_from_lines(slice.iter().copied(), word_length)
}

fn words_from_lines<'a>(
    lines: impl Iterator<Item = &'a str>,
    word_length: Option<usize>,
) -> Vec<String> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim_end();
            if trimmed.is_empty() {
                return None;
            }

            let word = Word::new(trimmed).ok()?;
            match word_length {
                Some(len) if word.text().chars().count() != len => None,
                _ => Some(word.text().to_string()),
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: Option<usize>) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content, word_length))
}

/// Where a language's word lists come from
pub trait VocabularySource {
    /// Fetch the words of one list
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the list is unavailable.
    fn fetch(
        &self,
        language: Language,
        variant: ListVariant,
        word_length: Option<usize>,
    ) -> io::Result<Vec<String>>;
}

/// Lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl VocabularySource for EmbeddedSource {
    fn fetch(
        &self,
        language: Language,
        variant: ListVariant,
        word_length: Option<usize>,
    ) -> io::Result<Vec<String>> {
        Ok(words_from_slice(embedded_list(language, variant), word_length))
    }
}

/// Lists read from `<dir>/<code>.txt` and `<dir>/<code>-common.txt`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn path_for(&self, language: Language, variant: ListVariant) -> PathBuf {
        self.root.join(format!("{}.txt", variant.file_stem(language)))
    }
}

impl VocabularySource for DirectorySource {
    fn fetch(
        &self,
        language: Language,
        variant: ListVariant,
        word_length: Option<usize>,
    ) -> io::Result<Vec<String>> {
        load_from_file(self.path_for(language, variant), word_length)
    }
}

/// Both vocabularies a game needs for one language
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Valid guesses
    pub guesses: Vocabulary,
    /// Pool random and daily words are drawn from
    pub answers: Vocabulary,
}

impl Lexicon {
    /// Fetch a language from a source
    ///
    /// Guesses come from the full list plus the answer list, so every answer
    /// is also a valid guess.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if either list cannot be fetched.
    pub fn fetch<S: VocabularySource + ?Sized>(
        source: &S,
        language: Language,
        variant: ListVariant,
        word_length: Option<usize>,
    ) -> io::Result<Self> {
        let full = source.fetch(language, ListVariant::Full, word_length)?;
        let answers = match variant {
            ListVariant::Full => full.clone(),
            ListVariant::Common => source.fetch(language, ListVariant::Common, word_length)?,
        };

        Ok(Self {
            guesses: Vocabulary::build(language, full.iter().chain(&answers)),
            answers: Vocabulary::build(language, &answers),
        })
    }
}
