//! Wordle Daily
//!
//! A multi-language word-guessing game with accent-insensitive guesses and a
//! timed, reproducible word of the day.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_daily::config::GameConfig;
//! use wordle_daily::daily::{MemoryStore, SystemClock};
//! use wordle_daily::game::GameSession;
//! use wordle_daily::wordlists::{EmbeddedSource, Language};
//!
//! let mut session = GameSession::new(GameConfig::default(), MemoryStore::default(), SystemClock);
//! session.load_language(Language::PtBr, &EmbeddedSource);
//!
//! session.enter_word("verao");
//! let outcome = session.submit();
//! println!("{outcome:?}");
//! ```

// Core domain types
pub mod core;

// Word lists and language handling
pub mod wordlists;

// Daily challenge tracking and persistence
pub mod daily;

// Game session
pub mod game;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
