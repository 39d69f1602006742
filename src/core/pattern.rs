//! Letter classification for a scored attempt
//!
//! Each letter of a guess is classified as:
//! - `Correct` (same letter, same position)
//! - `Present` (letter occurs elsewhere in the target, limited by multiplicity)
//! - `Miss` (otherwise)

use super::Word;
use serde::{Deserialize, Serialize};

/// Classification of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterResult {
    Correct,
    Present,
    Miss,
}

impl LetterResult {
    /// Emoji square for sharing
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }
}

/// Feedback for a whole guess, one result per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<LetterResult>);

impl Pattern {
    /// Per-letter results
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[LetterResult] {
        &self.0
    }

    /// Calculate the pattern when `guess` is compared against `target`
    ///
    /// Comparison runs on normalized letters, so accents never affect the
    /// outcome.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the target's
    ///    letter pool
    /// 2. Second pass: mark remaining letters present while the pool still
    ///    holds that letter, otherwise miss
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{LetterResult::*, Pattern, Word};
    ///
    /// let guess = Word::new("naaaaa").unwrap();
    /// let target = Word::new("banana").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// assert_eq!(
    ///     pattern.results(),
    ///     &[Present, Correct, Miss, Correct, Miss, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = vec![LetterResult::Miss; guess.len()];
        let mut target_available = target.letter_counts();

        // First pass: exact positions
        for (i, &letter) in guess.letters().iter().enumerate() {
            if target.letter_at(i) == Some(letter) {
                result[i] = LetterResult::Correct;

                if let Some(count) = target_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from what is left
        for (i, &letter) in guess.letters().iter().enumerate() {
            if result[i] == LetterResult::Correct {
                continue;
            }

            if let Some(count) = target_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterResult::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Count the number of correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterResult::Correct)
    }

    /// Count the number of present letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterResult::Present)
    }

    fn count(&self, kind: LetterResult) -> usize {
        self.0.iter().filter(|&&r| r == kind).count()
    }
}
