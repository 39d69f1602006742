//! Display functions for the line-mode game

use super::formatters::{format_duration, share_text};
use crate::commands::{CheckResult, WordOfDayResult};
use crate::core::{AttemptGrid, Cell, LetterResult};
use crate::daily::{ChallengeRecord, ChallengeState};
use crate::wordlists::Language;
use colored::{ColoredString, Colorize};

/// Print every row of the grid, scored rows in color
pub fn print_grid(grid: &AttemptGrid) {
    println!("{}", "─".repeat(grid.word_length() * 4 + 2).cyan());

    for (row_index, row) in grid.attempts().iter().enumerate() {
        let active = row_index == grid.current_attempt() && !grid.is_ended();
        let cells: Vec<String> = row
            .iter()
            .map(|cell| colored_cell(cell).to_string())
            .collect();

        let marker = if active { "▶".bright_yellow() } else { " ".normal() };
        println!("{marker} {}", cells.join(" "));
    }

    println!("{}", "─".repeat(grid.word_length() * 4 + 2).cyan());
}

fn colored_cell(cell: &Cell) -> ColoredString {
    let letter = format!(" {} ", cell.letter.unwrap_or('·'));

    match cell.result {
        Some(LetterResult::Correct) => letter.black().on_green().bold(),
        Some(LetterResult::Present) => letter.black().on_yellow().bold(),
        Some(LetterResult::Miss) => letter.white().on_bright_black(),
        None => letter.bright_white(),
    }
}

/// Print the end-of-game banner
pub fn print_game_over(grid: &AttemptGrid, solved: bool) {
    println!();
    if solved {
        let rows = grid.current_attempt() + 1;
        println!(
            "{}",
            format!(
                "🎉 Solved in {rows} {}!",
                if rows == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{} {}",
            "❌ The word was".red().bold(),
            grid.word().bright_yellow().bold()
        );
    }

    let share = share_text(grid.attempts());
    if !share.is_empty() {
        println!("\n{share}");
    }
    println!();
}

/// Print the state of a language's daily challenge
pub fn print_daily_status(language: Language, record: Option<&ChallengeRecord>, now: i64) {
    let label = format!("Daily {}", language.label()).bright_cyan().bold();

    match record.map(ChallengeRecord::state) {
        None | Some(ChallengeState::NotStarted) => {
            println!("{label}: not started");
        }
        Some(ChallengeState::Active) => {
            let elapsed = record.map_or(0, |r| r.elapsed_millis(now));
            println!("{label}: playing for {}", format_duration(elapsed).bright_yellow());
        }
        Some(ChallengeState::Completed) => {
            let elapsed = record.map_or(0, |r| r.elapsed_millis(now));
            let outcome = if record.and_then(|r| r.is_success) == Some(true) {
                "solved".green()
            } else {
                "failed".red()
            };
            println!("{label}: {outcome} in {}", format_duration(elapsed));
        }
    }
}

/// Print the word of the day
pub fn print_word_of_day(result: &WordOfDayResult) {
    println!(
        "{} {} ({}): {}",
        "☀️  Word of the day".bright_cyan().bold(),
        result.date,
        result.language.label(),
        result.word.bright_yellow().bold()
    );
    println!("   Drawn from {} words", result.pool_size);
}

/// Print how a word resolves in the dictionary
pub fn print_check_result(result: &CheckResult) {
    if result.is_valid() {
        println!(
            "{} {} → {}",
            "✅".green(),
            result.input.bright_white().bold(),
            result.spellings.join(", ").bright_yellow()
        );
        if result.is_answer {
            println!("   Can be drawn as an answer");
        } else {
            println!("   {}", "Valid guess only".bright_black());
        }
    } else {
        println!(
            "{} {} is not in the word list (looked up as {})",
            "❌".red(),
            result.input.bright_white().bold(),
            result.key
        );
    }
}
