//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O: accented
//! words, guess grading, and the aggregated keyboard statuses. All types here
//! are pure and have clear properties.

mod grade;
mod keyboard;
mod word;

pub use grade::{Grade, LetterStatus};
pub use keyboard::KeyStatusMap;
pub use word::{Word, WordError};

/// Fixed length of solutions and guesses
pub const WORD_LENGTH: usize = 5;

/// Maximum number of guesses allowed per session
pub const MAX_TRIES: usize = 6;
