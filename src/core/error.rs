//! Game error taxonomy

use crate::wordlists::Language;
use thiserror::Error;

/// Errors surfaced to the caller of a game command
///
/// All of them are recoverable from the caller's point of view: the first two
/// leave the grid untouched, `OutOfAttempts` is raised after the last row has
/// already been scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Submit was attempted before every cell of the row was filled
    #[error("Not enough letters")]
    InsufficientInput,

    /// The guess is not in the active vocabulary
    #[error("Word not found in vocabulary: {0}")]
    UnknownWord(String),

    /// The last row was consumed without finding the word
    #[error("No more attempts available, the word was {word}")]
    OutOfAttempts { word: String },

    /// The grid is not accepting input
    #[error("The game is over")]
    GameOver,

    /// No vocabulary has been loaded for the language yet
    #[error("Vocabulary for {0} is not available")]
    VocabularyUnavailable(Language),
}
