//! Formatting utilities for terminal output

use crate::core::{Cell, LetterResult, Pattern};

/// Format a scored row as an emoji string; unscored cells are skipped
#[must_use]
pub fn row_to_emoji(row: &[Cell]) -> String {
    row.iter()
        .filter_map(|cell| cell.result.map(LetterResult::emoji))
        .collect()
}

/// Emoji summary of every scored row, one line each
#[must_use]
pub fn share_text(rows: &[Vec<Cell>]) -> String {
    rows.iter()
        .map(|row| row_to_emoji(row))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Short feedback for a missed guess, e.g. `🟩 2  🟨 1`
#[must_use]
pub fn miss_summary(pattern: &Pattern) -> String {
    format!(
        "{} {}  {} {}",
        LetterResult::Correct.emoji(),
        pattern.count_correct(),
        LetterResult::Present.emoji(),
        pattern.count_present()
    )
}

/// Notice for a daily challenge picked up from an earlier run
#[must_use]
pub fn resumed_notice(rows_played: usize) -> String {
    let rows = match rows_played {
        0 => "no rows played yet".to_string(),
        1 => "1 row already played".to_string(),
        n => format!("{n} rows already played"),
    };
    format!("☀️ Back to today's challenge, {rows}. The clock kept running.")
}

/// Format elapsed milliseconds as `m:ss`
///
/// Minutes are not capped, so an hour reads `60:00`.
#[must_use]
pub fn format_duration(millis: i64) -> String {
    let total_seconds = millis.max(0) / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
