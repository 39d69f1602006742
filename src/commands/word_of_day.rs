//! Word of the day lookup

use crate::config::GameConfig;
use crate::daily::word_for_date;
use crate::wordlists::{Language, Lexicon, VocabularySource};
use anyhow::{Context, Result};
use chrono::NaiveDate;

/// The daily word of one language on one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordOfDayResult {
    pub language: Language,
    pub date: NaiveDate,
    pub word: String,
    /// Size of the list the word was drawn from
    pub pool_size: usize,
}

/// Compute the word of the day without touching any challenge state
///
/// # Errors
///
/// Returns an error if the vocabulary cannot be fetched or is empty.
pub fn word_of_day<V: VocabularySource + ?Sized>(
    source: &V,
    config: &GameConfig,
    language: Language,
    date: NaiveDate,
) -> Result<WordOfDayResult> {
    let lexicon = Lexicon::fetch(source, language, config.variant, Some(config.word_length))
        .with_context(|| format!("loading {language} vocabulary"))?;

    let word = word_for_date(&lexicon.answers, date)
        .with_context(|| format!("no {}-letter words for {language}", config.word_length))?;

    Ok(WordOfDayResult {
        language,
        date,
        word,
        pool_size: lexicon.answers.len(),
    })
}
