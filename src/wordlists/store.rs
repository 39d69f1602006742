//! Per-language vocabulary cache
//!
//! Fetching a language is asynchronous from the game's point of view: the
//! store hands out a [`FetchTicket`] and only accepts the completion that
//! matches the most recent request, so a slow fetch for a language the user
//! has already switched away from is dropped.

use super::{Language, Lexicon};
use crate::core::RandomSource;
use rustc_hash::FxHashMap;
use std::io;
use tracing::{debug, info, warn};

/// Identifies one outstanding fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    language: Language,
    generation: u64,
}

impl FetchTicket {
    #[must_use]
    pub const fn language(self) -> Language {
        self.language
    }
}

/// Selected language plus every lexicon loaded so far
#[derive(Debug, Default)]
pub struct LanguageStore {
    selected: Language,
    lexicons: FxHashMap<Language, Lexicon>,
    pending: Option<FetchTicket>,
    generation: u64,
}

impl LanguageStore {
    #[must_use]
    pub fn new(selected: Language) -> Self {
        Self {
            selected,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn selected(&self) -> Language {
        self.selected
    }

    /// Select a language
    ///
    /// Returns a ticket when the language still has to be fetched; `None`
    /// when it is already loaded and usable right away.
    pub fn set_language(&mut self, language: Language) -> Option<FetchTicket> {
        self.selected = language;

        if self.lexicons.contains_key(&language) {
            self.pending = None;
            return None;
        }

        self.generation += 1;
        let ticket = FetchTicket {
            language,
            generation: self.generation,
        };
        self.pending = Some(ticket);
        debug!(%language, generation = ticket.generation, "vocabulary fetch requested");

        Some(ticket)
    }

    /// Deliver the result of a fetch
    ///
    /// Returns `true` when the lexicon was stored for the selected language.
    /// Completions for superseded tickets are discarded; failures are logged
    /// and leave the language unavailable.
    pub fn complete(&mut self, ticket: FetchTicket, result: io::Result<Lexicon>) -> bool {
        if self.pending != Some(ticket) {
            debug!(language = %ticket.language, "discarding stale vocabulary fetch");
            return false;
        }

        self.pending = None;

        match result {
            Ok(lexicon) => {
                info!(
                    language = %ticket.language,
                    guesses = lexicon.guesses.len(),
                    answers = lexicon.answers.len(),
                    "vocabulary loaded"
                );
                self.lexicons.insert(ticket.language, lexicon);
                true
            }
            Err(err) => {
                warn!(language = %ticket.language, error = %err, "vocabulary unavailable");
                false
            }
        }
    }

    /// Store a lexicon directly, replacing any previous one
    pub fn insert(&mut self, language: Language, lexicon: Lexicon) {
        self.lexicons.insert(language, lexicon);
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Lexicon of the selected language, if loaded
    #[must_use]
    pub fn lexicon(&self) -> Option<&Lexicon> {
        self.lexicons.get(&self.selected)
    }

    /// Random answer for the selected language
    pub fn random_word<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<String> {
        self.lexicon()?.answers.random_word(rng).map(str::to_string)
    }
}
