//! Terminal output formatting
//!
//! Display utilities for the line-mode game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_daily_status, print_game_over, print_grid, print_word_of_day,
};
pub use formatters::{
    format_duration, miss_summary, resumed_notice, row_to_emoji, share_text,
};
