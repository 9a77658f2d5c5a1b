//! Formatting utilities for terminal output

use crate::core::{Grade, KeyStatusMap, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// One letter cell with its status colour
#[must_use]
pub fn letter_cell(letter: char, status: LetterStatus) -> ColoredString {
    let cell = format!(" {letter} ");
    match status {
        LetterStatus::Correct => cell.white().bold().on_green(),
        LetterStatus::Present => cell.black().bold().on_yellow(),
        LetterStatus::Absent => cell.white().on_black(),
    }
}

/// A full graded row: the guess's letters over their status colours
///
/// Uses the display form, so accents the lexicon knows about show up in the
/// row even though the player typed without them.
#[must_use]
pub fn graded_row(word: &Word, grade: &Grade) -> String {
    word.display()
        .chars()
        .enumerate()
        .map(|(i, letter)| letter_cell(letter, grade[i]).to_string())
        .collect()
}

/// Compact A–Z strip coloured by the best-known status of each letter
#[must_use]
pub fn keyboard_strip(keys: &KeyStatusMap) -> String {
    (b'A'..=b'Z')
        .map(|letter| {
            let ch = char::from(letter);
            match keys.status_of(letter) {
                Some(status) => letter_cell(ch, status).to_string(),
                None => format!(" {ch} "),
            }
        })
        .collect()
}
