//! Display functions for the plain game mode

use super::formatters::{graded_row, keyboard_strip};
use crate::game::{GameSession, GameStatus, SubmittedGuess};
use crate::wordlists::WordSource;
use colored::Colorize;

/// Print one submitted guess with the keyboard strip below it
pub fn print_graded_row<S: WordSource>(game: &GameSession<S>, guess: &SubmittedGuess) {
    println!("\n  {}", graded_row(&guess.word, &guess.grade));
    println!("\n  {}\n", keyboard_strip(game.keyboard()));
}

/// Print the end-of-game banner, solution reveal and share grid
pub fn print_outcome<S: WordSource>(game: &GameSession<S>) {
    match game.status() {
        GameStatus::Playing => {}
        GameStatus::Won => {
            println!(
                "{}",
                format!("Você venceu em {} tentativa(s)!", game.attempts_used())
                    .green()
                    .bold()
            );
        }
        GameStatus::Lost => {
            println!("{}", "Fim de jogo!".red().bold());
            println!(
                "A palavra era: {}",
                game.solution().display().bright_yellow().bold()
            );
        }
    }

    if let Some(share) = game.share_text() {
        println!("\n{share}\n");
    }
}
