//! TUI rendering with ratatui
//!
//! Board, messages and status bar for the game.

use super::app::{App, MessageStyle};
use crate::core::{Cell, LetterResult};
use crate::daily::{ChallengeState, Clock, KeyValueStore};
use crate::game::{GameMode, Hint};
use crate::output::format_duration;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let title = match app.session.mode() {
        GameMode::Daily => "☀️ WORDLE DAILY - Word of the Day",
        GameMode::Random | GameMode::Idle => "🔤 WORDLE DAILY",
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let grid = app.session.grid();
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if !grid.is_initialized() {
        let waiting = if app.session.is_loading() {
            "Loading words..."
        } else {
            "No word yet. Ctrl-N to start."
        };
        f.render_widget(Paragraph::new(waiting).block(block), area);
        return;
    }

    let cursor = grid.cursor();
    let lines: Vec<Line> = grid
        .attempts()
        .iter()
        .enumerate()
        .flat_map(|(row_index, row)| {
            let active = row_index == grid.current_attempt() && !grid.is_ended();
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .flat_map(|(col, cell)| {
                    let selected = active && col == cursor.col;
                    [cell_span(cell, selected), Span::raw(" ")]
                })
                .collect();

            [Line::from(spans), Line::from("")]
        })
        .collect();

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(board, area);
}

fn cell_span(cell: &Cell, selected: bool) -> Span<'static> {
    let text = format!(" {} ", cell.letter.unwrap_or(' '));

    let style = match cell.result {
        Some(LetterResult::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(LetterResult::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(LetterResult::Miss) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None if selected => Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
        None => Style::default().fg(Color::White).bg(Color::Black),
    };

    Span::styled(text, style.add_modifier(Modifier::BOLD))
}

fn render_side_panel<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hint
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_hint(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_hint<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let (title, line) = match app.session.hint() {
        Some(Hint::Suggestion(word)) => (
            " Try ",
            Line::from(Span::styled(spaced(&word), Style::default().fg(Color::DarkGray))),
        ),
        Some(Hint::Revealed(letters)) => (
            " Found ",
            Line::from(Span::styled(
                spaced(&letters.replace(' ', "_")),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ),
        None => (
            " Found ",
            Line::from(Span::styled("·", Style::default().fg(Color::DarkGray))),
        ),
    };

    let hint = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(hint, area);
}

fn spaced(letters: &str) -> String {
    letters.chars().flat_map(|c| [c, ' ']).collect()
}

fn render_messages<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(25),
            Constraint::Percentage(60),
        ])
        .split(area);

    let language = Paragraph::new(format!("Lang: {}", app.session.language().label()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(language, chunks[0]);

    let (daily_text, daily_color) = match app.daily_status() {
        Some((ChallengeState::Active, elapsed)) => {
            (format!("Daily ⏱ {}", format_duration(elapsed)), Color::Cyan)
        }
        Some((ChallengeState::Completed, elapsed)) => {
            (format!("Daily ✓ {}", format_duration(elapsed)), Color::Green)
        }
        Some((ChallengeState::NotStarted, _)) | None => {
            ("Daily: Ctrl-D".to_string(), Color::DarkGray)
        }
    };
    let daily = Paragraph::new(daily_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(daily_color));
    f.render_widget(daily, chunks[1]);

    let help = Paragraph::new("Esc Quit  ^N New  ^D Daily  ^G Give up  ^L Lang  ←→ Move")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
