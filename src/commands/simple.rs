//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one guess per line, commands start with `:`.

use crate::core::{GameError, SubmitOutcome};
use crate::daily::{Clock, KeyValueStore};
use crate::game::{DailyStart, GameMode, GameSession, Hint};
use crate::output::{
    format_duration, miss_summary, print_daily_status, print_game_over, print_grid,
    resumed_notice,
};
use crate::wordlists::{Language, VocabularySource};
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What one line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Guess(String),
    NewWord,
    Daily,
    GiveUp,
    /// `None` cycles to the next language
    Language(Option<Language>),
    Status,
    Help,
    Quit,
    Unknown(String),
}

impl SimpleCommand {
    /// Parse one trimmed line
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        let Some(command) = input.strip_prefix(':') else {
            return Self::Guess(input.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next().unwrap_or_default(), parts.next()) {
            ("q" | "quit" | "exit", _) => Self::Quit,
            ("n" | "new", _) => Self::NewWord,
            ("d" | "daily", _) => Self::Daily,
            ("g" | "giveup", _) => Self::GiveUp,
            ("s" | "status", _) => Self::Status,
            ("h" | "help", _) => Self::Help,
            ("l" | "lang", None) => Self::Language(None),
            ("l" | "lang", Some(code)) => match Language::from_code(code) {
                Some(language) => Self::Language(Some(language)),
                None => Self::Unknown(input.to_string()),
            },
            _ => Self::Unknown(input.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// selected language has no vocabulary.
pub fn run_simple<S, C, V>(session: &mut GameSession<S, C>, source: &V) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    V: VocabularySource + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle Daily - Simple Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let language = session.language();
    if !session.load_language(language, source) {
        bail!("no vocabulary available for {language}");
    }
    announce_game(session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_grid(session.grid());
        match session.hint() {
            Some(Hint::Suggestion(word)) => println!("Try: {}", word.bright_black()),
            Some(Hint::Revealed(letters)) => {
                println!("Found so far: {}", letters.bright_green().bold());
            }
            None => {}
        }

        print!("{} ", prompt(session).bright_cyan());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };

        match SimpleCommand::parse(&line?) {
            SimpleCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            SimpleCommand::Help => print_help(),
            SimpleCommand::NewWord => match session.new_word() {
                Ok(_) => announce_game(session),
                Err(err) => print_error(&err),
            },
            SimpleCommand::Daily => start_daily(session),
            SimpleCommand::GiveUp => {
                if session.give_up().is_some() {
                    print_game_over(session.grid(), false);
                } else {
                    println!("{}", "Nothing to give up.".bright_black());
                }
            }
            SimpleCommand::Language(choice) => {
                let language = choice.unwrap_or_else(|| session.language().next());
                if session.load_language(language, source) {
                    println!("Language: {}", language.label().bright_yellow().bold());
                    announce_game(session);
                } else {
                    print_error(&GameError::VocabularyUnavailable(language));
                }
            }
            SimpleCommand::Status => {
                let now = session.tracker().clock().now_millis();
                for language in Language::ALL {
                    print_daily_status(language, session.tracker().record(language), now);
                }
            }
            SimpleCommand::Unknown(input) => {
                println!("{} {input} (try :help)", "Unknown command:".red());
            }
            SimpleCommand::Guess(word) => {
                if word.is_empty() {
                    continue;
                }
                play_guess(session, &word);
            }
        }
    }
}

fn play_guess<S: KeyValueStore, C: Clock>(session: &mut GameSession<S, C>, word: &str) {
    if session.grid().is_ended() {
        println!("{}", "The game is over. :new or :daily to play again.".bright_black());
        return;
    }

    session.enter_word(word);
    match session.submit() {
        Ok(SubmitOutcome::Solved) => {
            print_grid(session.grid());
            print_game_over(session.grid(), true);
        }
        Ok(SubmitOutcome::Missed(pattern)) => println!("{}", miss_summary(&pattern)),
        Err(GameError::OutOfAttempts { .. }) => {
            print_grid(session.grid());
            print_game_over(session.grid(), false);
        }
        Err(err) => print_error(&err),
    }

    if session.grid().is_ended() && session.mode() == GameMode::Daily {
        let now = session.tracker().clock().now_millis();
        print_daily_status(
            session.language(),
            session.tracker().record(session.language()),
            now,
        );
    }
}

fn start_daily<S: KeyValueStore, C: Clock>(session: &mut GameSession<S, C>) {
    match session.new_daily_word() {
        Ok(DailyStart::Started) => {
            println!("{}", "☀️  Daily challenge started. The clock is running!".bright_yellow());
        }
        Ok(DailyStart::Resumed) => {
            let notice = resumed_notice(session.grid().current_attempt());
            println!("{}", notice.bright_yellow());
        }
        Ok(DailyStart::AlreadyPlaying) => {
            println!("{}", "You're already playing today's challenge.".bright_black());
        }
        Ok(DailyStart::AlreadyCompleted { .. }) => {
            let now = session.tracker().clock().now_millis();
            print_daily_status(
                session.language(),
                session.tracker().record(session.language()),
                now,
            );
            println!("{}", "Come back tomorrow for a new word.".bright_black());
        }
        Err(err) => print_error(&err),
    }
}

fn announce_game<S: KeyValueStore, C: Clock>(session: &GameSession<S, C>) {
    let grid = session.grid();
    println!(
        "\n🔤 New {}-letter word in {}. {} attempts.\n",
        grid.word_length(),
        session.language().label().bright_yellow().bold(),
        grid.number_of_attempts()
    );
}

fn prompt<S: KeyValueStore, C: Clock>(session: &GameSession<S, C>) -> String {
    let mut prompt = format!("[{}", session.language().label());
    if session.mode() == GameMode::Daily
        && let Some(elapsed) = session.daily_elapsed()
    {
        prompt.push_str(&format!(" daily {}", format_duration(elapsed)));
    }
    prompt.push_str("]>");
    prompt
}

fn print_error(err: &GameError) {
    println!("{} {err}", "❌".red());
}

fn print_help() {
    println!("Type a word and press Enter to guess. Accents are optional.");
    println!("Commands:");
    println!("  :new            new random word");
    println!("  :daily          word of the day (timed, once per day)");
    println!("  :giveup         reveal the word");
    println!("  :lang [code]    switch language (pt-br, en-us, fr) or cycle");
    println!("  :status         daily challenge results");
    println!("  :quit           exit\n");
}
