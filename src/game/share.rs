//! Shareable result text
//!
//! The classic copy-paste grid: a title with the attempt count, a blank
//! line, then one glyph line per guess in submission order.

use crate::core::MAX_TRIES;
use crate::game::{GameSession, GameStatus};
use crate::wordlists::WordSource;
use std::fmt::Write;

/// Title used in the share text
pub const GAME_NAME: &str = "PALAVRE";

impl<S: WordSource> GameSession<S> {
    /// The shareable result grid, available once the game ended
    ///
    /// `"PALAVRE 3/6"` for a three-guess win, `"PALAVRE X/6"` for a loss,
    /// then an empty line and one line of 🟩🟨⬛ glyphs per guess. No
    /// trailing newline. Returns `None` while the game is still playing.
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        let attempts = match self.status() {
            GameStatus::Playing => return None,
            GameStatus::Won => self.attempts_used().to_string(),
            GameStatus::Lost => "X".to_string(),
        };

        let mut text = format!("{GAME_NAME} {attempts}/{MAX_TRIES}\n");
        for guess in self.guesses() {
            // Infallible on String; the Write trait just wants a Result
            let _ = write!(text, "\n{}", guess.grade.to_glyphs());
        }
        Some(text)
    }
}
