//! Simple line-based game mode
//!
//! Plays a full game on stdin/stdout without the TUI: one prompt per
//! attempt, coloured rows, and the share grid at the end. Useful over
//! dumb terminals and in scripts.

use crate::core::{MAX_TRIES, WORD_LENGTH};
use crate::game::{GameSession, GameStatus, SubmitError};
use crate::output::{print_graded_row, print_outcome};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the plain-CLI game loop to completion
///
/// # Errors
/// Returns an error only on stdin/stdout failures; game-rule rejections are
/// printed and re-prompted.
pub fn run_simple<S: WordSource>(mut game: GameSession<S>) -> Result<()> {
    println!(
        "Adivinhe a palavra de {WORD_LENGTH} letras em até {MAX_TRIES} tentativas.\n"
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while game.status() == GameStatus::Playing {
        print!("Tentativa {}/{}: ", game.attempts_used() + 1, MAX_TRIES);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // stdin closed mid-game; nothing more to play
            println!();
            return Ok(());
        };
        let line = line?;

        for ch in line.trim().chars() {
            game.push_letter(ch);
        }

        match game.submit_guess() {
            Ok(_) => {
                // Grades live in the history now; print the latest row
                if let Some(last) = game.guesses().last() {
                    print_graded_row(&game, last);
                }
            }
            Err(err) => {
                println!("  {}", toast(err).yellow());
                // Clear the rejected text before re-prompting
                while !game.current_guess().is_empty() {
                    game.pop_letter();
                }
            }
        }
    }

    print_outcome(&game);
    Ok(())
}

/// User-facing message for a rejected submission
const fn toast(err: SubmitError) -> &'static str {
    match err {
        SubmitError::InsufficientLetters => "Letras insuficientes",
        SubmitError::UnknownWord => "Palavra não encontrada",
        SubmitError::GameOver => "O jogo acabou",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_messages_match_rejections() {
        assert_eq!(toast(SubmitError::InsufficientLetters), "Letras insuficientes");
        assert_eq!(toast(SubmitError::UnknownWord), "Palavra não encontrada");
        assert_eq!(toast(SubmitError::GameOver), "O jogo acabou");
    }
}
