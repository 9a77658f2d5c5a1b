//! TUI rendering with ratatui
//!
//! Board, virtual keyboard and message panels for the game interface.

use super::app::{App, TileState};
use crate::core::{LetterStatus, MAX_TRIES, WORD_LENGTH};
use crate::game::{GameStatus, Row};
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Length(MAX_TRIES as u16 + 2), // Board
            Constraint::Length(3),                    // Message / toast
            Constraint::Min(7),                       // Keyboard or share grid
            Constraint::Length(3),                    // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    if app.game.status().is_over() {
        render_result(f, app, chunks[3]);
    } else {
        render_keyboard(f, app, chunks[3]);
    }
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("PALAVRE")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn tile_style(state: TileState) -> Style {
    match state {
        TileState::Graded(LetterStatus::Correct) => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        TileState::Graded(LetterStatus::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TileState::Graded(LetterStatus::Absent) => {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        }
        TileState::Typing => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        TileState::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn tile_span(letter: char, state: TileState) -> Span<'static> {
    Span::styled(format!(" {letter} "), tile_style(state))
}

/// One board row as tiles
fn row_line<S: WordSource>(app: &App<S>, index: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    match app.game.row(index) {
        Row::Submitted(submitted) => {
            for (i, letter) in submitted.word.display().chars().enumerate() {
                spans.push(tile_span(letter, TileState::Graded(submitted.grade[i])));
                spans.push(Span::raw(" "));
            }
        }
        Row::Active(text) => {
            for letter in text.chars() {
                spans.push(tile_span(letter, TileState::Typing));
                spans.push(Span::raw(" "));
            }
            for _ in text.chars().count()..WORD_LENGTH {
                spans.push(tile_span('·', TileState::Empty));
                spans.push(Span::raw(" "));
            }
        }
        Row::Blank => {
            for _ in 0..WORD_LENGTH {
                spans.push(tile_span('·', TileState::Empty));
                spans.push(Span::raw(" "));
            }
        }
    }

    Line::from(spans)
}

fn render_board<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let lines: Vec<Line> = (0..MAX_TRIES).map(|i| row_line(app, i)).collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_message<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (text, style) = match app.toast {
        Some(toast) => (
            toast,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        None => (app.headline(), Style::default().fg(Color::Gray)),
    };

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn key_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_keyboard<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let keys = app.game.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    [
                        Span::styled(
                            format!(" {} ", char::from(letter)),
                            key_style(keys.status_of(letter)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Teclado "),
    );
    f.render_widget(keyboard, area);
}

/// End-of-game panel: reveal on loss plus the share grid
fn render_result<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut lines = Vec::new();

    if app.game.status() == GameStatus::Lost {
        lines.push(Line::from(vec![
            Span::raw("A palavra era: "),
            Span::styled(
                app.game.solution().display().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::raw(""));
    }

    if let Some(share) = app.game.share_text() {
        for row in share.lines() {
            lines.push(Line::raw(row.to_string()));
        }
    }

    let result = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Resultado "),
    );
    f.render_widget(result, area);
}

fn render_status<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let hint = if app.game.status().is_over() {
        "Enter/q sai"
    } else {
        "Letras digitam · Enter envia · Backspace apaga · Esc sai"
    };

    let status = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
