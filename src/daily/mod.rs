//! Daily challenge
//!
//! One persisted result per language and calendar day. The word of the day
//! is drawn from the answer list with a generator seeded by the local date.

mod challenge;
mod clock;
pub mod storage;
mod tracker;

pub use challenge::{ChallengeRecord, ChallengeState};
pub use clock::{Clock, FixedClock, SystemClock};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use tracker::{DailyTracker, StartOutcome, word_for_date};
