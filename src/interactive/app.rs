//! TUI application state and logic

use crate::core::LetterStatus;
use crate::game::{GameSession, GameStatus, SubmitError};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Display state of one board tile
///
/// Presentation-only: the core never deals in `Empty` or `Typing`, those
/// exist purely so the renderer can draw unsubmitted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    /// No letter yet
    Empty,
    /// A typed letter on the active row, not yet graded
    Typing,
    /// A graded letter of a submitted row
    Graded(LetterStatus),
}

/// Application state
pub struct App<S: WordSource> {
    pub game: GameSession<S>,
    pub toast: Option<&'static str>,
    pub should_quit: bool,
}

impl<S: WordSource> App<S> {
    #[must_use]
    pub const fn new(game: GameSession<S>) -> Self {
        Self {
            game,
            toast: None,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.game.status().is_over() {
            // Any of these leaves the result screen
            if matches!(
                code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | 'Q')
            ) {
                self.should_quit = true;
            }
            return;
        }

        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Backspace => {
                self.game.pop_letter();
                self.toast = None;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) => {
                // push_letter ignores anything that does not apply
                self.game.push_letter(c);
                self.toast = None;
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        self.toast = match self.game.submit_guess() {
            Ok(_) => None,
            Err(SubmitError::InsufficientLetters) => Some("Letras insuficientes"),
            Err(SubmitError::UnknownWord) => Some("Palavra não encontrada"),
            Err(SubmitError::GameOver) => Some("O jogo acabou"),
        };
    }

    /// Headline for the message area
    #[must_use]
    pub fn headline(&self) -> &'static str {
        match self.game.status() {
            GameStatus::Playing => "Digite uma palavra e pressione Enter",
            GameStatus::Won => "Você venceu!",
            GameStatus::Lost => "Fim de jogo!",
        }
    }
}

/// Run the TUI game to completion
///
/// # Errors
/// Returns terminal I/O errors; game-rule rejections surface as toasts.
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<()> {
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

    res
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (avoids double input on Windows)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::{Lexicon, LexiconSource, SolutionPick, loader::words_from_slice};

    fn app() -> App<LexiconSource> {
        let lexicon = Lexicon::new(
            words_from_slice(&["hábil", "termo", "sagaz", "bolas", "torto", "festa", "praia"]),
            Vec::new(),
        );
        let source = LexiconSource::new(
            lexicon,
            SolutionPick::Fixed(Word::new("hábil").unwrap()),
        );
        App::new(GameSession::new(source).unwrap())
    }

    fn type_word(app: &mut App<LexiconSource>, word: &str) {
        for ch in word.chars() {
            app.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_and_backspace_edit_the_active_row() {
        let mut app = app();
        type_word(&mut app, "ter");
        assert_eq!(app.game.current_guess(), "TER");

        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.game.current_guess(), "TE");
    }

    #[test]
    fn short_submission_raises_toast() {
        let mut app = app();
        type_word(&mut app, "te");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.toast, Some("Letras insuficientes"));

        // Typing again clears the toast
        app.handle_key(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(app.toast, None);
    }

    #[test]
    fn unknown_word_raises_toast_and_keeps_text() {
        let mut app = app();
        type_word(&mut app, "xxxxx");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.toast, Some("Palavra não encontrada"));
        assert_eq!(app.game.current_guess(), "XXXXX");
    }

    #[test]
    fn winning_locks_input_and_q_quits() {
        let mut app = app();
        type_word(&mut app, "habil");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.game.status(), GameStatus::Won);
        assert_eq!(app.headline(), "Você venceu!");

        // Letters no longer register
        app.handle_key(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(app.game.current_guess(), "");

        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn esc_quits_mid_game() {
        let mut app = app();
        type_word(&mut app, "te");
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }
}
