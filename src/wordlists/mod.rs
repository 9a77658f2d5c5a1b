//! Word lists and the word source seam
//!
//! The game core never fetches words itself: a [`WordSource`] hands it the
//! session's solution and answers "is this a valid guess?". The default
//! source is backed by a [`Lexicon`] built from the embedded lists, but tests
//! and the CLI can inject file-based or fixed-solution sources.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{ALLOWED, ALLOWED_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
pub use source::{Lexicon, LexiconSource, SolutionPick, WordSource, WordSourceError};
