//! Playable game: one grid, one language, one daily challenge per language

mod session;

pub use session::{DailyStart, GameMode, GameSession, Hint, fetch_lexicon, revealed_letters};
