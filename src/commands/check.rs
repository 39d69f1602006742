//! Dictionary lookup for a single word

use crate::config::GameConfig;
use crate::core::normalize;
use crate::wordlists::{Language, Lexicon, VocabularySource};
use anyhow::{Context, Result};

/// How a word resolves in one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub input: String,
    /// Accent-free form used for lookup
    pub key: String,
    /// Every dictionary spelling sharing the key
    pub spellings: Vec<String>,
    /// Whether the word can be drawn as an answer
    pub is_answer: bool,
}

impl CheckResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.spellings.is_empty()
    }
}

/// Look a word up the way a submitted guess is looked up
///
/// # Errors
///
/// Returns an error if the vocabulary cannot be fetched.
pub fn check_word<V: VocabularySource + ?Sized>(
    source: &V,
    config: &GameConfig,
    language: Language,
    word: &str,
) -> Result<CheckResult> {
    let lexicon = Lexicon::fetch(source, language, config.variant, Some(config.word_length))
        .with_context(|| format!("loading {language} vocabulary"))?;

    Ok(CheckResult {
        input: word.to_string(),
        key: normalize(word),
        spellings: lexicon.guesses.spellings(word).to_vec(),
        is_answer: lexicon.answers.contains(word),
    })
}
