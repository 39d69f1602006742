//! Game session
//!
//! Wires the language store, the attempt grid and the daily tracker together
//! and exposes the commands a front end needs. Every command runs to
//! completion before returning; the only asynchronous step is a vocabulary
//! fetch, which is completed through [`GameSession::vocabulary_loaded`].

use crate::config::GameConfig;
use crate::core::{
    AttemptGrid, Cell, GameError, LetterResult, SubmitOutcome, normalize, submit_attempt,
};
use crate::daily::storage::{LANGUAGE_KEY, stored_language};
use crate::daily::{ChallengeState, Clock, DailyTracker, KeyValueStore, StartOutcome};
use crate::wordlists::{FetchTicket, LanguageStore, Language, Lexicon, VocabularySource};
use std::io;
use tracing::{info, warn};

/// What kind of word is on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Nothing drawn yet
    #[default]
    Idle,
    Random,
    Daily,
}

/// Result of asking for the word of the day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyStart {
    /// A new challenge started
    Started,
    /// Today's challenge was running but not on the grid; the word is back
    Resumed,
    /// The challenge is already on the grid
    AlreadyPlaying,
    /// Today's challenge is over
    AlreadyCompleted { success: bool },
}

/// What the hint box offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// A dictionary word to open with, before anything is typed
    Suggestion(String),
    /// Letters found so far, see [`revealed_letters`]
    Revealed(String),
}

/// One player's game
pub struct GameSession<S, C> {
    config: GameConfig,
    languages: LanguageStore,
    grid: AttemptGrid,
    tracker: DailyTracker<S, C>,
    mode: GameMode,
    suggestion: Option<String>,
}

impl<S: KeyValueStore, C: Clock> GameSession<S, C> {
    /// Create a session
    ///
    /// The language comes from the config, or else from the store, or else
    /// the default. Today's daily records are restored for every language.
    /// No vocabulary is loaded yet: call
    /// [`Self::set_language`] with [`Self::language`] to request one.
    pub fn new(config: GameConfig, store: S, clock: C) -> Self {
        let language = config.language.unwrap_or_else(|| stored_language(&store));
        let mut tracker = DailyTracker::new(store, clock);
        for language in Language::ALL {
            tracker.load(language);
        }

        Self {
            config,
            languages: LanguageStore::new(language),
            grid: AttemptGrid::new(),
            tracker,
            mode: GameMode::Idle,
            suggestion: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.languages.selected()
    }

    #[must_use]
    pub const fn grid(&self) -> &AttemptGrid {
        &self.grid
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn tracker(&self) -> &DailyTracker<S, C> {
        &self.tracker
    }

    #[must_use]
    pub fn lexicon(&self) -> Option<&Lexicon> {
        self.languages.lexicon()
    }

    /// Whether the selected language is still being fetched
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.languages.is_pending()
    }

    /// Switch language
    ///
    /// Abandons a running daily challenge. When the language is already
    /// loaded a new word is drawn right away and `None` is returned;
    /// otherwise the returned ticket must be completed with
    /// [`Self::vocabulary_loaded`].
    pub fn set_language(&mut self, language: Language) -> Option<FetchTicket> {
        self.abandon_daily();

        if let Err(err) = self
            .tracker
            .store_mut()
            .set(LANGUAGE_KEY, language.code().to_string())
        {
            warn!(%language, error = %err, "could not persist selected language");
        }

        self.tracker.load(language);
        let ticket = self.languages.set_language(language);

        if ticket.is_none()
            && let Err(err) = self.new_word()
        {
            warn!(%language, error = %err, "no word available");
        }

        ticket
    }

    /// Complete a vocabulary fetch and, when it applies, start a new word
    ///
    /// Returns `true` if the vocabulary became the active one.
    pub fn vocabulary_loaded(&mut self, ticket: FetchTicket, result: io::Result<Lexicon>) -> bool {
        if !self.languages.complete(ticket, result) {
            return false;
        }

        match self.new_word() {
            Ok(_) => true,
            Err(err) => {
                warn!(language = %ticket.language(), error = %err, "no word available");
                false
            }
        }
    }

    /// Switch language and fetch it on the calling thread if needed
    ///
    /// Returns `true` when a game is ready on the new language.
    pub fn load_language<V: VocabularySource + ?Sized>(
        &mut self,
        language: Language,
        source: &V,
    ) -> bool {
        match self.set_language(language) {
            Some(ticket) => {
                let result = fetch_lexicon(source, &self.config, ticket);
                self.vocabulary_loaded(ticket, result)
            }
            None => self.lexicon().is_some(),
        }
    }

    /// Draw a random word and start a game on it
    ///
    /// # Errors
    /// Returns `GameError::VocabularyUnavailable` if the selected language is
    /// not loaded or has no answers.
    pub fn new_word(&mut self) -> Result<String, GameError> {
        let language = self.language();
        let word = self
            .languages
            .random_word(&mut rand::rng())
            .ok_or(GameError::VocabularyUnavailable(language))?;

        self.abandon_daily();

        let attempts = self.config.attempts_for(&word);
        self.grid.set_word(&word, attempts);
        self.mode = GameMode::Random;
        self.draw_suggestion();

        info!(%language, attempts, "new word drawn");
        Ok(word)
    }

    /// Start or return to the word of the day
    ///
    /// # Errors
    /// Returns `GameError::VocabularyUnavailable` if the selected language is
    /// not loaded or has no answers.
    pub fn new_daily_word(&mut self) -> Result<DailyStart, GameError> {
        let language = self.language();
        let lexicon = self
            .languages
            .lexicon()
            .ok_or(GameError::VocabularyUnavailable(language))?;

        let word = self
            .tracker
            .word_of_the_day(&lexicon.answers)
            .ok_or(GameError::VocabularyUnavailable(language))?;
        let attempts = self.config.attempts_for(&word);

        match self
            .tracker
            .start(language, &lexicon.answers, &mut self.grid, attempts)?
        {
            StartOutcome::Started(_) => {
                self.mode = GameMode::Daily;
                self.draw_suggestion();
                Ok(DailyStart::Started)
            }
            StartOutcome::AlreadyStarted(ChallengeState::Active) => {
                if self.mode == GameMode::Daily && self.grid.word() == word {
                    return Ok(DailyStart::AlreadyPlaying);
                }

                // Running since an earlier process; the start time is kept
                self.grid.set_word(&word, attempts);
                self.mode = GameMode::Daily;
                self.draw_suggestion();
                self.replay_daily_rows();
                info!(%language, rows = self.grid.current_attempt(), "daily challenge resumed");
                Ok(DailyStart::Resumed)
            }
            StartOutcome::AlreadyStarted(_) => {
                let success = self
                    .tracker
                    .record(language)
                    .and_then(|r| r.is_success)
                    .unwrap_or(false);
                Ok(DailyStart::AlreadyCompleted { success })
            }
        }
    }

    pub fn type_letter(&mut self, letter: char) {
        self.grid.type_letter(letter);
    }

    pub fn remove_letter(&mut self) {
        self.grid.remove_letter();
    }

    pub fn select_letter(&mut self, row: usize, col: usize) {
        self.grid.select_letter(row, col);
    }

    /// Replace the active row with `word`, as if typed from the first column
    ///
    /// Letters past the word length are dropped.
    pub fn enter_word(&mut self, word: &str) {
        fill_row(&mut self.grid, word);
    }

    /// Move the cursor one column left, if possible
    pub fn cursor_left(&mut self) {
        let cursor = self.grid.cursor();
        if let Some(col) = cursor.col.checked_sub(1) {
            self.grid.select_letter(cursor.row, col);
        }
    }

    /// Move the cursor one column right, if possible
    pub fn cursor_right(&mut self) {
        let cursor = self.grid.cursor();
        self.grid.select_letter(cursor.row, cursor.col + 1);
    }

    /// Score the active row
    ///
    /// # Errors
    /// See [`submit_attempt`]; `VocabularyUnavailable` when no vocabulary is
    /// loaded.
    pub fn submit(&mut self) -> Result<SubmitOutcome, GameError> {
        let language = self.language();
        let lexicon = self
            .languages
            .lexicon()
            .ok_or(GameError::VocabularyUnavailable(language))?;

        let result = submit_attempt(&mut self.grid, &lexicon.guesses);

        if self.mode == GameMode::Daily
            && matches!(result, Ok(SubmitOutcome::Missed(_)))
            && let Some(row) = self.grid.current_attempt().checked_sub(1)
        {
            let scored = row_word(&self.grid.attempts()[row]);
            self.tracker.record_guess(language, &scored);
        }

        if self.grid.is_ended() {
            info!(%language, solved = matches!(result, Ok(SubmitOutcome::Solved)), "game ended");
            if self.mode == GameMode::Daily {
                self.tracker.observe(language, &self.grid);
            }
        }

        result
    }

    /// End the game and reveal the word
    ///
    /// Returns `None` when there is no running game.
    pub fn give_up(&mut self) -> Option<String> {
        if !self.grid.is_initialized() || self.grid.is_ended() {
            return None;
        }

        let language = self.language();
        self.grid.set_ended(true);
        if self.mode == GameMode::Daily {
            self.tracker.observe(language, &self.grid);
        }

        info!(%language, "game given up");
        Some(self.grid.word().to_string())
    }

    /// An opening word while the first row is blank, then the letters found
    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        let blank_first_row = self.grid.is_initialized()
            && !self.grid.is_ended()
            && self.grid.current_attempt() == 0
            && self.grid.current_word().is_empty();

        if blank_first_row {
            return self.suggestion.clone().map(Hint::Suggestion);
        }

        revealed_letters(&self.grid).map(Hint::Revealed)
    }

    #[must_use]
    pub fn daily_state(&self) -> ChallengeState {
        self.tracker.state(self.language())
    }

    /// Time on the daily clock for the selected language
    #[must_use]
    pub fn daily_elapsed(&self) -> Option<i64> {
        self.tracker.elapsed_millis(self.language())
    }

    /// Pick an opening word for the new grid, never the target itself
    fn draw_suggestion(&mut self) {
        let target = normalize(self.grid.word());
        self.suggestion = self
            .languages
            .random_word(&mut rand::rng())
            .map(|word| normalize(&word))
            .filter(|word| *word != target);
    }

    /// Score again the rows saved for today's challenge
    fn replay_daily_rows(&mut self) {
        let language = self.language();
        let rows = self
            .tracker
            .record(language)
            .map(|record| record.guesses.clone())
            .unwrap_or_default();
        let Some(lexicon) = self.languages.lexicon() else {
            return;
        };

        for guess in &rows {
            fill_row(&mut self.grid, guess);
            match submit_attempt(&mut self.grid, &lexicon.guesses) {
                Ok(SubmitOutcome::Missed(_)) => {}
                Ok(SubmitOutcome::Solved) | Err(GameError::OutOfAttempts { .. }) => break,
                Err(err) => {
                    warn!(%language, %guess, error = %err, "saved daily row no longer applies");
                    fill_row(&mut self.grid, "");
                    break;
                }
            }
        }

        if self.grid.is_ended() {
            self.tracker.observe(language, &self.grid);
        }
    }

    fn abandon_daily(&mut self) {
        if self.mode == GameMode::Daily && !self.grid.is_ended() {
            let language = self.language();
            if self.tracker.complete(language, false) {
                info!(%language, "daily challenge abandoned");
            }
        }
        if self.mode == GameMode::Daily {
            self.mode = GameMode::Idle;
        }
    }
}

/// Letters already found at each column
///
/// Only offered while the active row is still empty and at least one row has
/// been scored. Letters are normalized; unknown columns are spaces.
#[must_use]
pub fn revealed_letters(grid: &AttemptGrid) -> Option<String> {
    if grid.is_ended() || grid.current_attempt() == 0 {
        return None;
    }

    if !grid.current_word().is_empty() {
        return None;
    }

    let mut revealed = vec![' '; grid.word_length()];
    for row in &grid.attempts()[..grid.current_attempt()] {
        for (col, cell) in row.iter().enumerate() {
            if cell.result == Some(LetterResult::Correct)
                && let Some(letter) = cell.letter
                && let Some(found) = normalize(&letter.to_string()).chars().next()
            {
                revealed[col] = found;
            }
        }
    }

    Some(revealed.into_iter().collect())
}

/// Replace the active row with `word` from the first column
fn fill_row(grid: &mut AttemptGrid, word: &str) {
    let row = grid.current_attempt();
    for col in (0..grid.word_length()).rev() {
        grid.select_letter(row, col);
        grid.remove_letter();
    }

    grid.select_letter(row, 0);
    for letter in word.chars().take(grid.word_length()) {
        grid.type_letter(letter);
    }
}

fn row_word(row: &[Cell]) -> String {
    row.iter().filter_map(|cell| cell.letter).collect()
}

/// Fetch what `ticket` asks for with the configured list and word length
///
/// # Errors
/// Returns the source's I/O error.
pub fn fetch_lexicon<V: VocabularySource + ?Sized>(
    source: &V,
    config: &GameConfig,
    ticket: FetchTicket,
) -> io::Result<Lexicon> {
    Lexicon::fetch(
        source,
        ticket.language(),
        config.variant,
        Some(config.word_length),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::{FixedClock, MemoryStore};
    use crate::wordlists::{EmbeddedSource, ListVariant, Vocabulary};
    use chrono::{Duration, Local, TimeZone};

    fn clock() -> FixedClock {
        FixedClock::new(Local.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap())
    }

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon {
            guesses: Vocabulary::build(Language::PtBr, words),
            answers: Vocabulary::build(Language::PtBr, words),
        }
    }

    fn loaded_session(words: &[&str], clock: &FixedClock) -> GameSession<MemoryStore, FixedClock> {
        let mut session = GameSession::new(
            GameConfig::default(),
            MemoryStore::default(),
            clock.clone(),
        );
        let ticket = session.set_language(Language::PtBr).unwrap();
        assert!(session.vocabulary_loaded(ticket, Ok(lexicon(words))));
        session
    }

    fn type_word<S: KeyValueStore, C: Clock>(session: &mut GameSession<S, C>, word: &str) {
        for c in word.chars() {
            session.type_letter(c);
        }
    }

    #[test]
    fn loading_a_vocabulary_starts_a_game() {
        let clock = clock();
        let session = loaded_session(&["TERMO"], &clock);

        assert_eq!(session.mode(), GameMode::Random);
        assert_eq!(session.grid().word(), "TERMO");
        assert_eq!(session.grid().number_of_attempts(), 6);
    }

    #[test]
    fn commands_before_vocabulary_fail() {
        let mut session = GameSession::new(
            GameConfig::default(),
            MemoryStore::default(),
            clock(),
        );

        assert_eq!(
            session.new_word(),
            Err(GameError::VocabularyUnavailable(Language::PtBr))
        );
        assert_eq!(
            session.submit(),
            Err(GameError::VocabularyUnavailable(Language::PtBr))
        );
    }

    #[test]
    fn stale_language_fetch_is_ignored() {
        let mut session = GameSession::new(
            GameConfig::default(),
            MemoryStore::default(),
            clock(),
        );
        let english = session.set_language(Language::EnUs).unwrap();
        let french = session.set_language(Language::Fr).unwrap();

        let en = Lexicon::fetch(&EmbeddedSource, Language::EnUs, ListVariant::Full, Some(5));
        assert!(!session.vocabulary_loaded(english, en));
        assert_eq!(session.mode(), GameMode::Idle);

        let fr = Lexicon::fetch(&EmbeddedSource, Language::Fr, ListVariant::Full, Some(5));
        assert!(session.vocabulary_loaded(french, fr));
        assert_eq!(session.language(), Language::Fr);
        assert_eq!(session.mode(), GameMode::Random);
    }

    #[test]
    fn load_language_fetches_embedded_lists() {
        let mut session = GameSession::new(
            GameConfig::default(),
            MemoryStore::default(),
            clock(),
        );

        assert!(session.load_language(Language::EnUs, &EmbeddedSource));
        assert_eq!(session.mode(), GameMode::Random);
        assert_eq!(session.grid().word_length(), 5);

        // Cached now: switching back needs no fetch
        assert!(session.load_language(Language::Fr, &EmbeddedSource));
        assert!(session.load_language(Language::EnUs, &EmbeddedSource));
        assert!(!session.is_loading());
    }

    #[test]
    fn selected_language_is_persisted() {
        let mut session = GameSession::new(
            GameConfig::default(),
            MemoryStore::default(),
            clock(),
        );
        session.set_language(Language::Fr);

        let store = session.tracker().store().clone();
        let restored = GameSession::new(GameConfig::default(), store, clock());
        assert_eq!(restored.language(), Language::Fr);
    }

    #[test]
    fn winning_submit_ends_game() {
        let clock = clock();
        let mut session = loaded_session(&["TERMO"], &clock);
        type_word(&mut session, "termo");

        assert_eq!(session.submit(), Ok(SubmitOutcome::Solved));
        assert!(session.grid().is_ended());
        assert_eq!(session.give_up(), None);
    }

    #[test]
    fn hint_shows_letters_found() {
        let clock = clock();
        let mut session = loaded_session(&["TERMO"], &clock);
        let lex = lexicon(&["TERMO", "TENSO", "ÂNIMO"]);
        let ticket = session.set_language(Language::EnUs).unwrap();
        session.vocabulary_loaded(ticket, Ok(lex));
        session.grid.set_word("TERMO", 6);
        session.suggestion = Some("TENSO".to_string());

        assert_eq!(session.hint(), Some(Hint::Suggestion("TENSO".to_string())));
        session.type_letter('A');
        assert_eq!(session.hint(), None);
        session.remove_letter();

        type_word(&mut session, "animo");
        session.submit().unwrap();
        assert_eq!(session.hint(), Some(Hint::Revealed("   MO".to_string())));

        type_word(&mut session, "tenso");
        session.submit().unwrap();
        assert_eq!(session.hint(), Some(Hint::Revealed("TE MO".to_string())));

        session.type_letter('T');
        assert_eq!(session.hint(), None);
    }

    #[test]
    fn opening_suggestion_is_never_the_target() {
        let clock = clock();
        let mut session = loaded_session(&["TERMO", "VERÃO"], &clock);

        for _ in 0..20 {
            session.new_word().unwrap();
            let target = normalize(session.grid().word());
            match session.hint() {
                Some(Hint::Suggestion(word)) => {
                    assert_ne!(word, target);
                    assert!(word == "TERMO" || word == "VERAO");
                }
                None => {}
                other => panic!("unexpected hint {other:?}"),
            }
        }

        let single = loaded_session(&["TERMO"], &clock);
        assert_eq!(single.hint(), None);
    }

    #[test]
    fn daily_start_is_idempotent_and_resumable() {
        let clock = clock();
        let mut session = loaded_session(&["AFETO", "ALGOZ", "AMIGO", "TERMO"], &clock);

        assert_eq!(session.new_daily_word(), Ok(DailyStart::Started));
        let daily_word = session.grid().word().to_string();
        let start = session.tracker().record(Language::PtBr).unwrap().start_time;

        clock.advance(Duration::minutes(5));
        assert_eq!(session.new_daily_word(), Ok(DailyStart::AlreadyPlaying));
        assert_eq!(session.daily_elapsed(), Some(300_000));

        // Restart: new session over the same store
        let store = session.tracker().store().clone();
        let mut restarted = GameSession::new(GameConfig::default(), store, clock.clone());
        let ticket = restarted.set_language(Language::PtBr).unwrap();
        restarted.vocabulary_loaded(ticket, Ok(lexicon(&["AFETO", "ALGOZ", "AMIGO", "TERMO"])));

        assert_eq!(restarted.new_daily_word(), Ok(DailyStart::Resumed));
        assert_eq!(restarted.grid().word(), daily_word);
        assert_eq!(
            restarted.tracker().record(Language::PtBr).unwrap().start_time,
            start
        );
    }

    #[test]
    fn resumed_daily_keeps_scored_rows() {
        let clock = clock();
        let words = ["AFETO", "ALGOZ", "AMIGO", "TERMO"];
        let mut session = loaded_session(&words, &clock);
        session.new_daily_word().unwrap();
        let daily_word = session.grid().word().to_string();
        let miss = words.iter().find(|w| **w != daily_word).unwrap();

        session.enter_word(miss);
        assert!(matches!(session.submit(), Ok(SubmitOutcome::Missed(_))));

        let store = session.tracker().store().clone();
        let mut restarted = GameSession::new(GameConfig::default(), store, clock.clone());
        let ticket = restarted.set_language(Language::PtBr).unwrap();
        restarted.vocabulary_loaded(ticket, Ok(lexicon(&words)));

        assert_eq!(restarted.new_daily_word(), Ok(DailyStart::Resumed));
        let grid = restarted.grid();
        assert_eq!(grid.current_attempt(), 1);
        assert_eq!(row_word(&grid.attempts()[0]), *miss);
        assert!(grid.attempts()[0].iter().all(|cell| cell.result.is_some()));
        assert!(matches!(restarted.hint(), Some(Hint::Revealed(_))));
    }

    #[test]
    fn random_game_rows_are_not_recorded() {
        let clock = clock();
        let words = ["AFETO", "ALGOZ"];
        let mut session = loaded_session(&words, &clock);
        session.new_daily_word().unwrap();
        session.give_up();
        session.new_word().unwrap();
        let target = session.grid().word().to_string();
        let miss = words.iter().find(|w| **w != target).unwrap();

        session.enter_word(miss);
        session.submit().unwrap();
        assert!(session.tracker().record(Language::PtBr).unwrap().guesses.is_empty());
    }

    #[test]
    fn new_word_abandons_daily_challenge() {
        let clock = clock();
        let mut session = loaded_session(&["AFETO", "ALGOZ", "AMIGO"], &clock);
        session.new_daily_word().unwrap();

        clock.advance(Duration::seconds(10));
        session.new_word().unwrap();

        let record = session.tracker().record(Language::PtBr).unwrap();
        assert_eq!(record.is_success, Some(false));
        assert_eq!(record.end_time - record.start_time, 10_000);
        assert_eq!(
            session.new_daily_word(),
            Ok(DailyStart::AlreadyCompleted { success: false })
        );
    }

    #[test]
    fn daily_win_is_recorded() {
        let clock = clock();
        let mut session = loaded_session(&["AFETO", "ALGOZ", "AMIGO"], &clock);
        session.new_daily_word().unwrap();
        let word = session.grid().word().to_string();

        clock.advance(Duration::seconds(42));
        type_word(&mut session, &word);
        assert_eq!(session.submit(), Ok(SubmitOutcome::Solved));

        assert_eq!(session.daily_state(), ChallengeState::Completed);
        let record = session.tracker().record(Language::PtBr).unwrap();
        assert_eq!(record.is_success, Some(true));
        assert_eq!(session.daily_elapsed(), Some(42_000));
    }

    #[test]
    fn daily_loss_is_recorded_after_last_row() {
        let clock = clock();
        let words = ["AFETO", "ALGOZ", "AMIGO"];
        let config = GameConfig {
            attempts: Some(2),
            ..GameConfig::default()
        };
        let mut session = GameSession::new(config, MemoryStore::default(), clock.clone());
        let ticket = session.set_language(Language::PtBr).unwrap();
        session.vocabulary_loaded(ticket, Ok(lexicon(&words)));
        session.new_daily_word().unwrap();

        let target = session.grid().word().to_string();
        let wrong = words.iter().find(|w| **w != target).unwrap();

        type_word(&mut session, wrong);
        assert!(matches!(session.submit(), Ok(SubmitOutcome::Missed(_))));
        type_word(&mut session, wrong);
        assert_eq!(
            session.submit(),
            Err(GameError::OutOfAttempts { word: target })
        );

        assert!(session.grid().attempts()[1].iter().all(|c| c.result.is_some()));
        let record = session.tracker().record(Language::PtBr).unwrap();
        assert_eq!(record.is_success, Some(false));
    }

    #[test]
    fn daily_give_up_reveals_word_and_fails() {
        let clock = clock();
        let mut session = loaded_session(&["AFETO", "ALGOZ", "AMIGO"], &clock);
        session.new_daily_word().unwrap();
        let word = session.grid().word().to_string();

        assert_eq!(session.give_up(), Some(word));
        assert_eq!(session.daily_state(), ChallengeState::Completed);
        assert_eq!(
            session.tracker().record(Language::PtBr).unwrap().is_success,
            Some(false)
        );
    }

    #[test]
    fn enter_word_replaces_active_row() {
        let clock = clock();
        let mut session = loaded_session(&["TERMO", "TENSO"], &clock);

        session.enter_word("xyzwv");
        assert_eq!(session.submit(), Err(GameError::UnknownWord("XYZWV".to_string())));

        session.enter_word("te");
        assert_eq!(session.grid().current_word(), "TE");
        assert_eq!(session.submit(), Err(GameError::InsufficientInput));

        session.enter_word("tensorial");
        assert_eq!(session.grid().current_word(), "TENSO");
    }

    #[test]
    fn cursor_moves_within_row() {
        let clock = clock();
        let mut session = loaded_session(&["TERMO"], &clock);

        session.cursor_left();
        assert_eq!(session.grid().cursor().col, 0);
        session.cursor_right();
        session.cursor_right();
        assert_eq!(session.grid().cursor().col, 2);
        for _ in 0..10 {
            session.cursor_right();
        }
        assert_eq!(session.grid().cursor().col, 4);
    }
}
