//! Attempt grid state machine
//!
//! The grid owns every letter cell. It starts uninitialized (no word, no
//! rows), becomes active on [`AttemptGrid::set_word`] and ends either when the
//! last row is consumed or when a caller forces it with
//! [`AttemptGrid::set_ended`].

use super::{GameError, LetterResult};
use serde::{Deserialize, Serialize};

/// A single letter cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// `row_col`
    pub id: String,
    pub letter: Option<char>,
    /// Absent until the row is scored
    pub result: Option<LetterResult>,
}

impl Cell {
    fn blank(row: usize, col: usize) -> Self {
        Self {
            id: format!("{row}_{col}"),
            letter: None,
            result: None,
        }
    }
}

/// Selected cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Matrix of attempts for one game
#[derive(Debug, Clone, Default)]
pub struct AttemptGrid {
    word: String,
    number_of_attempts: usize,
    word_length: usize,
    attempts: Vec<Vec<Cell>>,
    current_attempt: usize,
    cursor: Cursor,
    ended: bool,
}

impl AttemptGrid {
    /// An uninitialized grid
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the grid for a new target word
    ///
    /// Discards all previous state and builds `number_of_attempts` blank rows
    /// of one cell per letter of `word`.
    pub fn set_word(&mut self, word: &str, number_of_attempts: usize) {
        let word_length = word.chars().count();

        *self = Self {
            word: word.to_string(),
            number_of_attempts,
            word_length,
            attempts: (0..number_of_attempts)
                .map(|row| (0..word_length).map(|col| Cell::blank(row, col)).collect())
                .collect(),
            current_attempt: 0,
            cursor: Cursor::default(),
            ended: false,
        };

        self.select_letter(0, 0);
    }

    /// Target word, empty before the first `set_word`
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub const fn number_of_attempts(&self) -> usize {
        self.number_of_attempts
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Every row, read-only
    #[must_use]
    pub fn attempts(&self) -> &[Vec<Cell>] {
        &self.attempts
    }

    /// Index of the active row
    #[must_use]
    pub const fn current_attempt(&self) -> usize {
        self.current_attempt
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        !self.word.is_empty()
    }

    /// Whether the game is over
    ///
    /// True when forced by [`Self::set_ended`], when the last row has been
    /// consumed, and for an uninitialized grid.
    #[must_use]
    pub const fn is_ended(&self) -> bool {
        self.ended || self.current_attempt >= self.number_of_attempts
    }

    /// Move the cursor
    ///
    /// Ignored unless `row` is the active row and `col` is within the word.
    pub fn select_letter(&mut self, row: usize, col: usize) {
        if row != self.current_attempt {
            return;
        }

        if row >= self.number_of_attempts || col >= self.word_length {
            return;
        }

        self.cursor = Cursor { row, col };
    }

    /// Write a letter at the cursor and advance one column
    ///
    /// The cursor stays on the last column when the row is full.
    pub fn type_letter(&mut self, letter: char) {
        if self.is_ended() {
            return;
        }

        let Cursor { row, col } = self.cursor;
        let mut cells = self.current_attempt_cells();

        if let Some(cell) = cells.get_mut(col) {
            cell.letter = letter.to_uppercase().next();
        }

        self.update_current_attempt(cells);
        self.select_letter(row, col + 1);
    }

    /// Backspace
    ///
    /// Clears the cursor cell if it holds a letter; otherwise clears the
    /// previous cell and moves the cursor there.
    pub fn remove_letter(&mut self) {
        if self.is_ended() {
            return;
        }

        let Cursor { row, col } = self.cursor;
        let mut cells = self.current_attempt_cells();

        let Some(cell) = cells.get_mut(col) else {
            return;
        };

        if cell.letter.is_some() {
            cell.letter = None;
        } else if col > 0 {
            cells[col - 1].letter = None;
            self.select_letter(row, col - 1);
        }

        self.update_current_attempt(cells);
    }

    /// Copy of the active row
    #[must_use]
    pub fn current_attempt_cells(&self) -> Vec<Cell> {
        self.attempts
            .get(self.current_attempt)
            .cloned()
            .unwrap_or_default()
    }

    /// Letters typed in the active row, blanks skipped
    #[must_use]
    pub fn current_word(&self) -> String {
        self.attempts
            .get(self.current_attempt)
            .map(|cells| cells.iter().filter_map(|c| c.letter).collect())
            .unwrap_or_default()
    }

    /// Replace the active row wholesale
    pub fn update_current_attempt(&mut self, cells: Vec<Cell>) {
        if let Some(row) = self.attempts.get_mut(self.current_attempt) {
            *row = cells;
        }
    }

    /// Move on to the next row
    ///
    /// # Errors
    /// Returns `GameError::OutOfAttempts` and ends the game when the active
    /// row is the last one.
    pub fn next_attempt(&mut self) -> Result<(), GameError> {
        if self.current_attempt + 1 >= self.number_of_attempts {
            self.ended = true;

            return Err(GameError::OutOfAttempts {
                word: self.word.clone(),
            });
        }

        self.current_attempt += 1;
        self.select_letter(self.current_attempt, 0);

        Ok(())
    }

    /// Force the terminal state on or off
    pub fn set_ended(&mut self, ended: bool) {
        self.ended = ended;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(word: &str, attempts: usize) -> AttemptGrid {
        let mut grid = AttemptGrid::new();
        grid.set_word(word, attempts);
        grid
    }

    fn letters(cells: &[Cell]) -> String {
        cells
            .iter()
            .map(|c| c.letter.unwrap_or(' '))
            .collect()
    }

    #[test]
    fn uninitialized_grid_is_ended() {
        let grid = AttemptGrid::new();
        assert_eq!(grid.word(), "");
        assert_eq!(grid.current_attempt(), 0);
        assert!(grid.attempts().is_empty());
        assert!(grid.is_ended());
        assert!(!grid.is_initialized());
    }

    #[test]
    fn set_word_builds_blank_matrix() {
        for (word, attempts) in [("BANANA", 6), ("WEB", 2), ("VERÃO", 6), ("A", 1)] {
            let grid = grid(word, attempts);

            assert_eq!(grid.word(), word);
            assert_eq!(grid.number_of_attempts(), attempts);
            assert_eq!(grid.word_length(), word.chars().count());
            assert_eq!(grid.attempts().len(), attempts);
            for row in grid.attempts() {
                assert_eq!(row.len(), word.chars().count());
                assert!(row.iter().all(|c| c.letter.is_none() && c.result.is_none()));
            }
            assert_eq!(grid.cursor(), Cursor { row: 0, col: 0 });
            assert!(!grid.is_ended());
        }
    }

    #[test]
    fn set_word_assigns_cell_ids() {
        let grid = grid("WEB", 2);
        assert_eq!(grid.attempts()[1][2].id, "1_2");
    }

    #[test]
    fn set_word_discards_previous_state() {
        let mut grid = grid("WEB", 2);
        grid.type_letter('W');
        grid.next_attempt().unwrap();
        grid.set_ended(true);

        grid.set_word("TESTE", 6);
        assert_eq!(grid.current_attempt(), 0);
        assert_eq!(grid.current_word(), "");
        assert!(!grid.is_ended());
    }

    #[test]
    fn type_letter_writes_and_advances() {
        let mut grid = grid("TESTE", 5);
        grid.type_letter('t');

        let current = grid.current_attempt_cells();
        assert_eq!(current[0].letter, Some('T'));
        assert_eq!(grid.cursor().col, 1);
    }

    #[test]
    fn type_letter_stops_at_last_column() {
        let mut grid = grid("WEB", 2);
        for c in ['W', 'E', 'B', 'X'] {
            grid.type_letter(c);
        }

        assert_eq!(grid.cursor().col, 2);
        assert_eq!(grid.current_word(), "WEX");
    }

    #[test]
    fn type_then_remove_restores_row() {
        let mut grid = grid("TESTE", 5);
        grid.type_letter('T');
        grid.type_letter('E');
        let before = grid.current_attempt_cells();
        let cursor = grid.cursor();

        grid.type_letter('S');
        grid.remove_letter();

        assert_eq!(grid.current_attempt_cells(), before);
        assert_eq!(grid.cursor(), cursor);
    }

    #[test]
    fn remove_letter_clears_cursor_cell_in_place() {
        let mut grid = grid("TESTE", 5);
        grid.type_letter('T');
        grid.type_letter('E');
        grid.select_letter(0, 0);

        grid.remove_letter();
        assert_eq!(letters(&grid.current_attempt_cells()), " E   ");
        assert_eq!(grid.cursor().col, 0);
    }

    #[test]
    fn remove_letter_on_full_row_clears_last_cell() {
        let mut grid = grid("WEB", 2);
        for c in ['W', 'E', 'B'] {
            grid.type_letter(c);
        }

        grid.remove_letter();
        assert_eq!(grid.current_word(), "WE");
        assert_eq!(grid.cursor().col, 2);

        grid.remove_letter();
        assert_eq!(grid.current_word(), "W");
        assert_eq!(grid.cursor().col, 1);
    }

    #[test]
    fn remove_letter_at_first_column_is_noop() {
        let mut grid = grid("WEB", 2);
        grid.remove_letter();
        assert_eq!(grid.cursor().col, 0);
        assert_eq!(grid.current_word(), "");
    }

    #[test]
    fn select_letter_ignores_other_rows() {
        let mut grid = grid("TESTE", 5);
        grid.select_letter(1, 0);
        assert_eq!(grid.cursor().row, 0);
    }

    #[test]
    fn select_letter_ignores_out_of_bounds_column() {
        let mut grid = grid("TESTE", 5);
        grid.select_letter(0, 3);
        grid.select_letter(0, 5);
        assert_eq!(grid.cursor(), Cursor { row: 0, col: 3 });
    }

    #[test]
    fn current_attempt_cells_is_a_copy() {
        let mut grid = grid("WEB", 2);
        let mut copy = grid.current_attempt_cells();
        copy[0].letter = Some('Z');

        assert_eq!(grid.current_word(), "");
        grid.update_current_attempt(copy);
        assert_eq!(grid.current_word(), "Z");
    }

    #[test]
    fn next_attempt_advances_and_resets_column() {
        let mut grid = grid("WEB", 2);
        grid.type_letter('W');
        grid.next_attempt().unwrap();

        assert_eq!(grid.current_attempt(), 1);
        assert_eq!(grid.cursor(), Cursor { row: 1, col: 0 });
        assert!(!grid.is_ended());
    }

    #[test]
    fn next_attempt_fails_on_last_row() {
        let mut grid = grid("WEB", 2);
        grid.next_attempt().unwrap();

        let err = grid.next_attempt().unwrap_err();
        assert_eq!(
            err,
            GameError::OutOfAttempts {
                word: "WEB".to_string()
            }
        );
        assert!(grid.is_ended());
        assert_eq!(grid.current_attempt(), 1);
    }

    #[test]
    fn next_attempt_with_single_row_fails_immediately() {
        let mut grid = grid("WEB", 1);
        assert!(grid.next_attempt().is_err());
        assert!(grid.is_ended());
    }

    #[test]
    fn ended_grid_rejects_letter_mutation() {
        let mut grid = grid("WEB", 2);
        grid.type_letter('W');
        grid.set_ended(true);

        grid.type_letter('E');
        grid.remove_letter();
        assert_eq!(grid.current_word(), "W");
    }

    #[test]
    fn set_ended_overrides_attempt_count() {
        let mut grid = grid("WEB", 2);
        grid.set_ended(true);
        assert!(grid.is_ended());
        grid.set_ended(false);
        assert!(!grid.is_ended());
    }
}
