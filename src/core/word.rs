//! Accent-aware word representation
//!
//! A `Word` keeps two forms of the same five letters: the display form with
//! its original accents (`HÁBIL`) and a normalized ASCII form used for every
//! comparison (`HABIL`). Portuguese players type on accent-free keyboards, so
//! grading, win detection and dictionary membership all work on the
//! normalized form while the accented form is what gets shown.

use crate::core::WORD_LENGTH;
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use unicode_normalization::UnicodeNormalization;

/// A five-letter word with its accents preserved for display
///
/// Equality and hashing ignore accents: `Word::new("habil")` and
/// `Word::new("hábil")` compare equal.
#[derive(Debug, Clone)]
pub struct Word {
    display: String,
    normalized: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word contains non-alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Strip diacritics and uppercase, leaving plain ASCII for valid input
///
/// NFD decomposition followed by dropping the combining marks in
/// U+0300..=U+036F. This covers every Portuguese diacritic, including the
/// cedilla (ç decomposes to c + U+0327).
fn strip_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .flat_map(char::to_uppercase)
        .collect()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input may carry accents; they are preserved in the display form
    /// and stripped in the normalized form.
    ///
    /// # Errors
    /// Returns `WordError` if, after stripping diacritics, the text is not
    /// exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use palavre::core::Word;
    ///
    /// let word = Word::new("hábil").unwrap();
    /// assert_eq!(word.display(), "HÁBIL");
    /// assert_eq!(word.letters(), b"HABIL");
    ///
    /// assert!(Word::new("longa demais").is_err());
    /// assert!(Word::new("h4bil").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();
        let stripped = strip_diacritics(trimmed);

        let count = stripped.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        if !stripped.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Safe: five ASCII uppercase letters means exactly five bytes
        let normalized: [u8; WORD_LENGTH] = stripped
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidCharacters)?;

        Ok(Self {
            display: trimmed.to_uppercase(),
            normalized,
        })
    }

    /// The accent-preserving uppercase form, for rendering and reveal-on-loss
    #[inline]
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The normalized letters (ASCII uppercase, accents stripped)
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.normalized
    }

    /// The normalized letter at a position (0-4)
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`.
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.normalized[position]
    }

    /// Count of each normalized letter, for duplicate-safe grading
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.normalized {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

// Accent-insensitive identity: "HABIL" and "HÁBIL" are the same word.
impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}
