//! Daily challenge tracker
//!
//! Owns one record per language, persists it through a [`KeyValueStore`] and
//! reacts to the end of a game. A record from an earlier day is never
//! carried over: loading or starting on a new date discards it.

use super::storage::challenge_key;
use super::{ChallengeRecord, ChallengeState, Clock, KeyValueStore};
use crate::core::{AttemptGrid, GameError, LetterResult, SequenceGenerator};
use crate::wordlists::{Language, Vocabulary};
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

/// What [`DailyTracker::start`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// A fresh record was created and the grid was set to this word
    Started(String),
    /// Today's challenge was already started; nothing changed
    AlreadyStarted(ChallengeState),
}

/// Daily challenge state for every language
pub struct DailyTracker<S, C> {
    store: S,
    clock: C,
    records: FxHashMap<Language, ChallengeRecord>,
}

impl<S: KeyValueStore, C: Clock> DailyTracker<S, C> {
    #[must_use]
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            records: FxHashMap::default(),
        }
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Rehydrate the persisted record for `language`
    ///
    /// Only a record dated today is kept; anything else is removed from the
    /// store.
    pub fn load(&mut self, language: Language) -> Option<&ChallengeRecord> {
        let today = self.clock.today();
        let key = challenge_key(language);

        let persisted = match self.store.get(&key) {
            Ok(value) => value,
            Err(err) => {
                warn!(%language, error = %err, "could not read daily challenge");
                None
            }
        };

        let record = persisted.and_then(|json| match serde_json::from_str::<ChallengeRecord>(&json) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(%language, error = %err, "discarding unreadable daily challenge");
                None
            }
        });

        match record {
            Some(record) if record.date == today => {
                debug!(%language, state = ?record.state(), "daily challenge restored");
                self.records.insert(language, record);
            }
            Some(record) => {
                info!(%language, date = %record.date, "daily challenge from another day reset");
                self.reset(language);
            }
            None => {
                self.records.remove(&language);
            }
        }

        self.records.get(&language)
    }

    /// Today's record for `language`, if any
    #[must_use]
    pub fn record(&self, language: Language) -> Option<&ChallengeRecord> {
        let today = self.clock.today();
        self.records.get(&language).filter(|r| r.date == today)
    }

    #[must_use]
    pub fn state(&self, language: Language) -> ChallengeState {
        self.record(language)
            .map_or(ChallengeState::NotStarted, ChallengeRecord::state)
    }

    #[must_use]
    pub fn is_active(&self, language: Language) -> bool {
        self.state(language) == ChallengeState::Active
    }

    /// Word of the day for `language`
    ///
    /// The first draw of the day-seeded sequence picks the word, so the
    /// result only depends on the date and the answer list.
    #[must_use]
    pub fn word_of_the_day(&self, answers: &Vocabulary) -> Option<String> {
        word_for_date(answers, self.clock.today())
    }

    /// Start today's challenge
    ///
    /// Idempotent within a calendar day. On a new day the previous record is
    /// replaced, unfinished or not.
    ///
    /// # Errors
    /// Returns `GameError::VocabularyUnavailable` if `answers` is empty.
    pub fn start(
        &mut self,
        language: Language,
        answers: &Vocabulary,
        grid: &mut AttemptGrid,
        number_of_attempts: usize,
    ) -> Result<StartOutcome, GameError> {
        let today = self.clock.today();

        if !self.records.contains_key(&language) {
            self.load(language);
        }

        if let Some(record) = self.records.get(&language) {
            if record.date == today && record.is_started {
                return Ok(StartOutcome::AlreadyStarted(record.state()));
            }

            if record.is_active() {
                info!(%language, date = %record.date, "unfinished daily challenge counted as failed");
            }
        }

        let word = word_for_date(answers, today).ok_or(GameError::VocabularyUnavailable(language))?;

        grid.set_word(&word, number_of_attempts);

        let record = ChallengeRecord::started(today, self.clock.now_millis());
        self.records.insert(language, record);
        self.persist(language);

        info!(%language, %today, "daily challenge started");
        Ok(StartOutcome::Started(word))
    }

    /// Close today's challenge if it is running
    ///
    /// Returns `true` when the record changed.
    pub fn complete(&mut self, language: Language, success: bool) -> bool {
        let now = self.clock.now_millis();
        let today = self.clock.today();

        let Some(record) = self.records.get_mut(&language) else {
            return false;
        };

        if record.date != today || !record.is_active() {
            return false;
        }

        record.close(now, success);
        info!(
            %language,
            success,
            elapsed_ms = record.elapsed_millis(now),
            "daily challenge completed"
        );
        self.persist(language);
        true
    }

    /// Remember a scored row of today's running challenge
    ///
    /// Returns `true` when the row was stored.
    pub fn record_guess(&mut self, language: Language, guess: &str) -> bool {
        let today = self.clock.today();

        let Some(record) = self.records.get_mut(&language) else {
            return false;
        };

        if record.date != today || !record.is_active() {
            return false;
        }

        record.guesses.push(guess.to_string());
        debug!(%language, rows = record.guesses.len(), "daily row recorded");
        self.persist(language);
        true
    }

    /// Record the outcome once the grid has ended
    ///
    /// A grid with a fully correct row is a success; any other ended grid
    /// (attempts exhausted, given up) is a failure. A running grid is ignored.
    pub fn observe(&mut self, language: Language, grid: &AttemptGrid) -> bool {
        if !grid.is_ended() {
            return false;
        }

        self.complete(language, is_solved(grid))
    }

    /// Milliseconds on the clock for today's challenge
    #[must_use]
    pub fn elapsed_millis(&self, language: Language) -> Option<i64> {
        let now = self.clock.now_millis();
        self.record(language).map(|r| r.elapsed_millis(now))
    }

    fn reset(&mut self, language: Language) {
        self.records.remove(&language);
        if let Err(err) = self.store.remove(&challenge_key(language)) {
            warn!(%language, error = %err, "could not reset daily challenge");
        }
    }

    fn persist(&mut self, language: Language) {
        let Some(record) = self.records.get(&language) else {
            return;
        };

        let result = serde_json::to_string(record)
            .map_err(super::StorageError::from)
            .and_then(|json| self.store.set(&challenge_key(language), json));

        if let Err(err) = result {
            warn!(%language, error = %err, "could not persist daily challenge");
        }
    }
}

/// Draw the word for a calendar date
#[must_use]
pub fn word_for_date(answers: &Vocabulary, date: NaiveDate) -> Option<String> {
    answers
        .random_word(&mut SequenceGenerator::for_day(date))
        .map(str::to_string)
}

fn is_solved(grid: &AttemptGrid) -> bool {
    grid.attempts().iter().any(|row| {
        !row.is_empty()
            && row
                .iter()
                .all(|cell| cell.result == Some(LetterResult::Correct))
    })
}
