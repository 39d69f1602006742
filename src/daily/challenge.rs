//! Daily challenge record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a language's challenge for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeState {
    NotStarted,
    Active,
    Completed,
}

/// Persisted result of one day's challenge
///
/// Times are epoch milliseconds; `end_time == 0` while the challenge runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRecord {
    pub date: NaiveDate,
    pub start_time: i64,
    pub end_time: i64,
    pub is_success: Option<bool>,
    pub is_started: bool,
    /// Rows scored while the challenge runs, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guesses: Vec<String>,
}

impl ChallengeRecord {
    /// A challenge started at `start_time`
    #[must_use]
    pub const fn started(date: NaiveDate, start_time: i64) -> Self {
        Self {
            date,
            start_time,
            end_time: 0,
            is_success: None,
            is_started: true,
            guesses: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> ChallengeState {
        if !self.is_started {
            ChallengeState::NotStarted
        } else if self.end_time == 0 {
            ChallengeState::Active
        } else {
            ChallengeState::Completed
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state(), ChallengeState::Active)
    }

    /// Fix the outcome; ignored once completed
    pub fn close(&mut self, end_time: i64, success: bool) {
        if !self.is_active() {
            return;
        }

        // A zero end time means "running"
        self.end_time = end_time.max(self.start_time).max(1);
        self.is_success = Some(success);
    }

    /// Milliseconds spent so far, or in total once completed
    #[must_use]
    pub fn elapsed_millis(&self, now: i64) -> i64 {
        match self.state() {
            ChallengeState::NotStarted => 0,
            ChallengeState::Active => (now - self.start_time).max(0),
            ChallengeState::Completed => self.end_time - self.start_time,
        }
    }
}
