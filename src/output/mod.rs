//! Terminal output formatting
//!
//! Display utilities for the plain (non-TUI) game mode.

pub mod display;
pub mod formatters;

pub use display::{print_graded_row, print_outcome};
