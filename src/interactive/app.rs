//! TUI application state and logic

use crate::core::{GameError, SubmitOutcome};
use crate::daily::{ChallengeState, Clock, KeyValueStore};
use crate::game::{DailyStart, GameSession, fetch_lexicon};
use crate::output::{miss_summary, resumed_notice};
use crate::wordlists::{FetchTicket, Language, Lexicon, VocabularySource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Redraw interval, so the daily timer keeps ticking
const TICK: Duration = Duration::from_millis(250);

type FetchResult = (FetchTicket, io::Result<Lexicon>);

/// Application state
pub struct App<S, C> {
    pub session: GameSession<S, C>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    source: Arc<dyn VocabularySource + Send + Sync>,
    fetch_tx: Sender<FetchResult>,
    fetch_rx: Receiver<FetchResult>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: KeyValueStore, C: Clock> App<S, C> {
    #[must_use]
    pub fn new(session: GameSession<S, C>, source: Arc<dyn VocabularySource + Send + Sync>) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::channel();

        Self {
            session,
            messages: vec![Message {
                text: "Welcome! Type a word and press Enter. Accents are optional.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            source,
            fetch_tx,
            fetch_rx,
        }
    }

    /// Switch language, fetching its vocabulary in the background if needed
    pub fn select_language(&mut self, language: Language) {
        match self.session.set_language(language) {
            Some(ticket) => {
                let source = Arc::clone(&self.source);
                let config = self.session.config().clone();
                let tx = self.fetch_tx.clone();

                thread::spawn(move || {
                    let result = fetch_lexicon(&*source, &config, ticket);
                    // The receiver is gone once the app has quit
                    let _ = tx.send((ticket, result));
                });

                self.add_message(
                    &format!("Loading {} words...", language.label()),
                    MessageStyle::Info,
                );
            }
            None => self.announce_game(),
        }
    }

    /// Apply every finished fetch
    pub fn poll_fetches(&mut self) {
        while let Ok((ticket, result)) = self.fetch_rx.try_recv() {
            self.apply_fetch(ticket, result);
        }
    }

    fn apply_fetch(&mut self, ticket: FetchTicket, result: io::Result<Lexicon>) {
        let failed = result.is_err();

        if self.session.vocabulary_loaded(ticket, result) {
            self.announce_game();
        } else if failed && ticket.language() == self.session.language() {
            self.add_message(
                &GameError::VocabularyUnavailable(ticket.language()).to_string(),
                MessageStyle::Error,
            );
        } else {
            debug!(language = %ticket.language(), "fetch result dropped");
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_word(),
            KeyCode::Char('d') if ctrl => self.start_daily(),
            KeyCode::Char('g') if ctrl => self.give_up(),
            KeyCode::Char('l') if ctrl => {
                let next = self.session.language().next();
                self.select_language(next);
            }
            KeyCode::Char(c) if !ctrl && c.is_alphabetic() => self.session.type_letter(c),
            KeyCode::Backspace => self.session.remove_letter(),
            KeyCode::Left => self.session.cursor_left(),
            KeyCode::Right => self.session.cursor_right(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit() {
            Ok(SubmitOutcome::Solved) => {
                let rows = self.session.grid().current_attempt() + 1;
                let celebration = match rows {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
                    3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
                    n => format!("🎉 SOLVED in {n} guesses! 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Ctrl-N for a new word.", MessageStyle::Info);
            }
            Ok(SubmitOutcome::Missed(pattern)) => {
                self.add_message(&miss_summary(&pattern), MessageStyle::Info);
            }
            Err(GameError::OutOfAttempts { word }) => {
                self.add_message(&format!("The word was {word}"), MessageStyle::Error);
                self.add_message("Ctrl-N for a new word.", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_word(&mut self) {
        match self.session.new_word() {
            Ok(_) => self.announce_game(),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn start_daily(&mut self) {
        match self.session.new_daily_word() {
            Ok(DailyStart::Started) => {
                self.add_message("☀️ Daily challenge started!", MessageStyle::Success);
            }
            Ok(DailyStart::Resumed) => {
                let notice = resumed_notice(self.session.grid().current_attempt());
                self.add_message(&notice, MessageStyle::Info);
            }
            Ok(DailyStart::AlreadyPlaying) => {
                self.add_message("Already playing today's challenge.", MessageStyle::Info);
            }
            Ok(DailyStart::AlreadyCompleted { success }) => {
                let text = if success {
                    "Today's challenge is solved. Come back tomorrow!"
                } else {
                    "Today's challenge is over. Come back tomorrow!"
                };
                self.add_message(text, MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn give_up(&mut self) {
        if let Some(word) = self.session.give_up() {
            self.add_message(&format!("The word was {word}"), MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Daily timer text for the status bar, if today's challenge exists
    #[must_use]
    pub fn daily_status(&self) -> Option<(ChallengeState, i64)> {
        let elapsed = self.session.daily_elapsed()?;
        Some((self.session.daily_state(), elapsed))
    }

    fn announce_game(&mut self) {
        let grid = self.session.grid();
        let text = format!(
            "New {}-letter word in {}. {} attempts.",
            grid.word_length(),
            self.session.language().label(),
            grid.number_of_attempts()
        );
        self.add_message(&text, MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, C: Clock>(mut app: App<S, C>) -> Result<()> {
    let language = app.session.language();
    app.select_language(language);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S, C>(terminal: &mut Terminal<B>, mut app: App<S, C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
    C: Clock,
{
    loop {
        app.poll_fetches();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::daily::{FixedClock, MemoryStore};
    use crate::wordlists::EmbeddedSource;
    use chrono::{Local, TimeZone};

    fn app() -> App<MemoryStore, FixedClock> {
        let clock = FixedClock::new(Local.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap());
        let session = GameSession::new(GameConfig::default(), MemoryStore::default(), clock);
        App::new(session, Arc::new(EmbeddedSource))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn loaded_app() -> App<MemoryStore, FixedClock> {
        let mut app = app();
        app.select_language(Language::EnUs);
        let (ticket, result) = app.fetch_rx.recv().unwrap();
        app.apply_fetch(ticket, result);
        app
    }

    #[test]
    fn background_fetch_starts_a_game() {
        let app = loaded_app();
        assert_eq!(app.session.language(), Language::EnUs);
        assert!(app.session.grid().is_initialized());
        assert!(app.messages.last().unwrap().text.contains("EN"));
    }

    #[test]
    fn typing_and_backspace_edit_the_row() {
        let mut app = loaded_app();
        app.handle_key(press(KeyCode::Char('a')));
        app.handle_key(press(KeyCode::Char('b')));
        app.handle_key(press(KeyCode::Char('1')));
        assert_eq!(app.session.grid().current_word(), "AB");

        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.session.grid().current_word(), "A");
    }

    #[test]
    fn short_submit_shows_error() {
        let mut app = loaded_app();
        app.handle_key(press(KeyCode::Char('a')));
        app.handle_key(press(KeyCode::Enter));

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Not enough letters");
    }

    #[test]
    fn ctrl_keys_drive_commands() {
        let mut app = loaded_app();

        app.handle_key(ctrl('d'));
        assert!(app.daily_status().is_some());

        app.handle_key(ctrl('g'));
        assert!(app.session.grid().is_ended());
        assert_eq!(app.session.daily_state(), ChallengeState::Completed);

        app.handle_key(ctrl('n'));
        assert!(!app.session.grid().is_ended());

        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn missed_guess_reports_letter_counts() {
        let mut app = loaded_app();
        let target = app.session.grid().word().to_string();
        let guess = ["crane", "slate"]
            .into_iter()
            .find(|w| !w.eq_ignore_ascii_case(&target))
            .unwrap();

        for c in guess.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Enter));

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Info);
        assert!(last.text.starts_with("🟩 "));
        assert!(last.text.contains("🟨 "));
        assert_eq!(app.session.grid().current_attempt(), 1);
    }

    #[test]
    fn resumed_daily_tells_rows_played() {
        let mut first = loaded_app();
        first.handle_key(ctrl('d'));
        let target = first.session.grid().word().to_string();
        let guess = ["crane", "slate"]
            .into_iter()
            .find(|w| !w.eq_ignore_ascii_case(&target))
            .unwrap();
        for c in guess.chars() {
            first.handle_key(press(KeyCode::Char(c)));
        }
        first.handle_key(press(KeyCode::Enter));

        let store = first.session.tracker().store().clone();
        let clock = first.session.tracker().clock().clone();
        let session = GameSession::new(GameConfig::default(), store, clock);
        let mut app = App::new(session, Arc::new(EmbeddedSource));
        app.select_language(Language::EnUs);
        let (ticket, result) = app.fetch_rx.recv().unwrap();
        app.apply_fetch(ticket, result);

        app.handle_key(ctrl('d'));
        assert!(app.messages.last().unwrap().text.contains("1 row already played"));
        assert_eq!(app.session.grid().current_attempt(), 1);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = loaded_app();
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.session.grid().current_word(), "");
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..8 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "3");
    }
}
