//! Core domain types for the game
//!
//! Word normalization, letter classification, the attempt grid state machine
//! and the deterministic sequence behind the word of the day. Nothing in here
//! performs I/O.

mod error;
mod grid;
mod pattern;
pub mod scoring;
mod sequence;
mod word;

pub use error::GameError;
pub use grid::{AttemptGrid, Cell, Cursor};
pub use pattern::{LetterResult, Pattern};
pub use scoring::{SubmitOutcome, submit_attempt};
pub use sequence::{RandomSource, SequenceGenerator, day_seed};
pub use word::{Word, WordError, normalize, same_spelling};
