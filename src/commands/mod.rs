//! Command implementations

pub mod check;
pub mod simple;
pub mod word_of_day;

pub use check::{CheckResult, check_word};
pub use simple::{SimpleCommand, run_simple};
pub use word_of_day::{WordOfDayResult, word_of_day};
