//! Palavre
//!
//! A terminal Wordle-style word game in Portuguese. Guesses are typed
//! without accents; grading, win detection and dictionary membership are
//! accent-insensitive while the board still shows the accented forms.
//!
//! # Quick Start
//!
//! ```rust
//! use palavre::core::{Grade, LetterStatus, Word};
//!
//! let solution = Word::new("hábil").unwrap();
//! let guess = Word::new("bolas").unwrap();
//!
//! let grade = Grade::calculate(&guess, &solution);
//! assert_eq!(grade[0], LetterStatus::Present); // B is in HABIL, misplaced
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists and the word source seam
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
