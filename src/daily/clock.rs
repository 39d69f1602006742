//! Wall clock

use chrono::{DateTime, Duration, Local, NaiveDate};
use std::cell::Cell;
use std::rc::Rc;

/// Source of "now" in the local time zone
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// Local calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to
///
/// Clones share the same instant, so a test can keep a handle and advance
/// time under a component that owns another clone.
#[derive(Debug, Clone)]
pub struct FixedClock(Rc<Cell<DateTime<Local>>>);

impl FixedClock {
    #[must_use]
    pub fn new(now: DateTime<Local>) -> Self {
        Self(Rc::new(Cell::new(now)))
    }

    pub fn set(&self, now: DateTime<Local>) {
        self.0.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0.get()
    }
}
