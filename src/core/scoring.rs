//! Attempt submission and scoring
//!
//! Stateless: reads the active row and the vocabulary, writes the classified
//! row back through the grid.

use super::{AttemptGrid, GameError, Pattern, Word, same_spelling};
use crate::wordlists::Vocabulary;

/// Result of a scored submission that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The target was found, the grid is ended
    Solved,
    /// A valid word that is not the target; the grid moved to the next row
    Missed(Pattern),
}

/// Score the active row against the grid's target word
///
/// 1. A row with blank cells fails with `InsufficientInput`.
/// 2. A row spelled exactly like the target (accents included) wins.
/// 3. Otherwise the row must be in `vocabulary` (normalized lookup), else
///    `UnknownWord` and nothing changes.
/// 4. The dictionary spelling is classified against the target, written back
///    and the grid advances. On the last row the classified row stays visible
///    and `OutOfAttempts` is returned.
///
/// A guess whose vocabulary entry lists the target's own spelling also wins:
/// this is how a target with accents is found from unaccented keystrokes.
///
/// # Errors
/// `GameOver`, `InsufficientInput`, `UnknownWord` or `OutOfAttempts`.
pub fn submit_attempt(
    grid: &mut AttemptGrid,
    vocabulary: &Vocabulary,
) -> Result<SubmitOutcome, GameError> {
    if grid.is_ended() {
        return Err(GameError::GameOver);
    }

    let attempt = grid.current_word();

    if attempt.chars().count() < grid.word_length() {
        return Err(GameError::InsufficientInput);
    }

    let target = grid.word().to_string();

    if same_spelling(&attempt, &target)
        || vocabulary
            .spellings(&attempt)
            .iter()
            .any(|spelling| same_spelling(spelling, &target))
    {
        word_hit(grid, &target);
        return Ok(SubmitOutcome::Solved);
    }

    let Some(found) = vocabulary.lookup(&attempt) else {
        return Err(GameError::UnknownWord(attempt));
    };

    let guess = Word::new(found).map_err(|_| GameError::UnknownWord(attempt.clone()))?;
    let target_word = Word::new(&target).map_err(|_| GameError::UnknownWord(attempt))?;
    let pattern = Pattern::calculate(&guess, &target_word);

    let mut cells = grid.current_attempt_cells();
    for ((cell, letter), result) in cells.iter_mut().zip(found.chars()).zip(pattern.results()) {
        cell.letter = Some(letter);
        cell.result = Some(*result);
    }
    grid.update_current_attempt(cells);

    grid.next_attempt()?;

    Ok(SubmitOutcome::Missed(pattern))
}

/// Write the target's own letters as correct and end the game
fn word_hit(grid: &mut AttemptGrid, target: &str) {
    let mut cells = grid.current_attempt_cells();
    for (cell, letter) in cells.iter_mut().zip(target.chars()) {
        cell.letter = Some(letter);
        cell.result = Some(super::LetterResult::Correct);
    }
    grid.update_current_attempt(cells);
    grid.set_ended(true);
}
