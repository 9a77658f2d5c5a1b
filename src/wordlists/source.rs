//! The word source consumed by the game session
//!
//! A [`WordSource`] supplies exactly two things: the session's solution and
//! an accent-insensitive membership test for guesses. [`LexiconSource`] is
//! the production implementation, picking the solution from a [`Lexicon`] by
//! daily rotation, at random, or fixed for testing.

use crate::core::Word;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::Path;
use time::{Date, OffsetDateTime, macros::date};

/// Start of the daily rotation
const DAILY_EPOCH: Date = date!(1970 - 01 - 01);

/// Supplies the session's solution and the guess-validity predicate
pub trait WordSource {
    /// Resolve the solution for this session
    ///
    /// # Errors
    /// Returns [`WordSourceError`] when no solution data is available. The
    /// session cannot be constructed in that case.
    fn resolve_solution(&self) -> Result<Word, WordSourceError>;

    /// Accent- and case-insensitive membership test for guesses
    ///
    /// Must accept the resolved solution itself.
    fn is_valid_guess(&self, text: &str) -> bool;
}

/// Error resolving a solution; fatal to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    /// The solution list is empty
    NoSolutions,
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSolutions => write!(f, "No solution words available"),
        }
    }
}

impl std::error::Error for WordSourceError {}

/// An owned word list pair: daily solutions plus the allowed-guess set
///
/// Membership is accent-insensitive because [`Word`] equality is.
#[derive(Debug, Clone)]
pub struct Lexicon {
    solutions: Vec<Word>,
    allowed: FxHashSet<Word>,
}

impl Lexicon {
    /// Build a lexicon from explicit lists
    ///
    /// Every solution is also inserted into the allowed set, so the daily
    /// word is always a legal guess.
    #[must_use]
    pub fn new(solutions: Vec<Word>, allowed: impl IntoIterator<Item = Word>) -> Self {
        let mut allowed: FxHashSet<Word> = allowed.into_iter().collect();
        allowed.extend(solutions.iter().cloned());
        Self { solutions, allowed }
    }

    /// The embedded lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        use super::loader::words_from_slice;
        use super::{ALLOWED, SOLUTIONS};

        Self::new(words_from_slice(SOLUTIONS), words_from_slice(ALLOWED))
    }

    /// Load both lists from files, one word per line
    ///
    /// Invalid lines are skipped, matching the loader's behaviour.
    ///
    /// # Errors
    /// Returns an I/O error if either file cannot be read.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        solutions: P,
        allowed: Q,
    ) -> io::Result<Self> {
        use super::loader::load_from_file;

        Ok(Self::new(
            load_from_file(solutions)?,
            load_from_file(allowed)?,
        ))
    }

    /// The solution words in daily rotation order
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Accent-insensitive membership test
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.allowed.contains(&word))
    }

    /// The solution for a given date
    ///
    /// Index is days since 1970-01-01 modulo the list length, cycling once
    /// the list is exhausted. Predictable by design so deployments agree on
    /// the daily word; not randomized.
    #[must_use]
    pub fn solution_for_day(&self, day: Date) -> Option<&Word> {
        if self.solutions.is_empty() {
            return None;
        }
        let days = i64::from(day.to_julian_day() - DAILY_EPOCH.to_julian_day());
        let len = i64::try_from(self.solutions.len()).ok()?;
        let index = usize::try_from(days.rem_euclid(len)).ok()?;
        self.solutions.get(index)
    }
}

/// How [`LexiconSource`] picks the session's solution
#[derive(Debug, Clone)]
pub enum SolutionPick {
    /// The word for this date under the daily rotation
    Daily(Date),
    /// A fixed word, for testing and the `--solution` flag
    Fixed(Word),
    /// A uniformly random solution from the list
    Random,
}

/// [`WordSource`] backed by a [`Lexicon`]
#[derive(Debug, Clone)]
pub struct LexiconSource {
    lexicon: Lexicon,
    pick: SolutionPick,
}

impl LexiconSource {
    #[must_use]
    pub const fn new(lexicon: Lexicon, pick: SolutionPick) -> Self {
        Self { lexicon, pick }
    }

    /// Today's word (UTC) from the lexicon's daily rotation
    #[must_use]
    pub fn daily(lexicon: Lexicon) -> Self {
        Self::new(
            lexicon,
            SolutionPick::Daily(OffsetDateTime::now_utc().date()),
        )
    }
}

impl WordSource for LexiconSource {
    fn resolve_solution(&self) -> Result<Word, WordSourceError> {
        match &self.pick {
            SolutionPick::Daily(day) => self
                .lexicon
                .solution_for_day(*day)
                .cloned()
                .ok_or(WordSourceError::NoSolutions),
            SolutionPick::Fixed(word) => Ok(word.clone()),
            SolutionPick::Random => self
                .lexicon
                .solutions()
                .choose(&mut rand::rng())
                .cloned()
                .ok_or(WordSourceError::NoSolutions),
        }
    }

    fn is_valid_guess(&self, text: &str) -> bool {
        if self.lexicon.contains(text) {
            return true;
        }
        // A fixed solution outside the lexicon must still be guessable
        if let SolutionPick::Fixed(word) = &self.pick {
            return Word::new(text).is_ok_and(|guess| &guess == word);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn tiny_lexicon() -> Lexicon {
        Lexicon::new(
            words_from_slice(&["hábil", "termo", "sagaz"]),
            words_from_slice(&["bolas", "torto"]),
        )
    }

    #[test]
    fn contains_is_accent_insensitive() {
        let lexicon = tiny_lexicon();
        assert!(lexicon.contains("hábil"));
        assert!(lexicon.contains("habil"));
        assert!(lexicon.contains("HABIL"));
        assert!(!lexicon.contains("zzzzz"));
        assert!(!lexicon.contains("oi"));
    }

    #[test]
    fn solutions_are_always_guessable() {
        let lexicon = tiny_lexicon();
        for word in ["hábil", "termo", "sagaz"] {
            assert!(lexicon.contains(word), "solution '{word}' not guessable");
        }
    }

    #[test]
    fn daily_rotation_is_deterministic_and_cycles() {
        let lexicon = tiny_lexicon();

        let day0 = lexicon.solution_for_day(date!(1970 - 01 - 01)).unwrap();
        assert_eq!(day0.display(), "HÁBIL");

        let day1 = lexicon.solution_for_day(date!(1970 - 01 - 02)).unwrap();
        assert_eq!(day1.display(), "TERMO");

        // Three solutions, so day 3 wraps back to the first
        let day3 = lexicon.solution_for_day(date!(1970 - 01 - 04)).unwrap();
        assert_eq!(day3.display(), "HÁBIL");

        // Same date, same word
        let again = lexicon.solution_for_day(date!(1970 - 01 - 02)).unwrap();
        assert_eq!(day1, again);
    }

    #[test]
    fn daily_rotation_on_empty_list() {
        let lexicon = Lexicon::new(Vec::new(), Vec::new());
        assert!(lexicon.solution_for_day(date!(2024 - 06 - 01)).is_none());
    }

    #[test]
    fn resolve_daily_solution() {
        let source = LexiconSource::new(tiny_lexicon(), SolutionPick::Daily(date!(1970 - 01 - 01)));
        let solution = source.resolve_solution().unwrap();
        assert_eq!(solution.display(), "HÁBIL");
        assert!(source.is_valid_guess(solution.display()));
    }

    #[test]
    fn resolve_fixed_solution_outside_lexicon() {
        let word = Word::new("xerox").unwrap();
        let source = LexiconSource::new(tiny_lexicon(), SolutionPick::Fixed(word));

        let solution = source.resolve_solution().unwrap();
        assert_eq!(solution.display(), "XEROX");
        // The fixed solution is guessable even though the lexicon lacks it
        assert!(source.is_valid_guess("xerox"));
        assert!(source.is_valid_guess("bolas"));
        assert!(!source.is_valid_guess("zzzzz"));
    }

    #[test]
    fn resolve_random_solution_comes_from_list() {
        let source = LexiconSource::new(tiny_lexicon(), SolutionPick::Random);
        let solution = source.resolve_solution().unwrap();
        assert!(["HÁBIL", "TERMO", "SAGAZ"].contains(&solution.display()));
    }

    #[test]
    fn resolve_fails_without_solutions() {
        let empty = Lexicon::new(Vec::new(), Vec::new());
        let source = LexiconSource::new(empty.clone(), SolutionPick::Random);
        assert_eq!(
            source.resolve_solution(),
            Err(WordSourceError::NoSolutions)
        );

        let source = LexiconSource::new(empty, SolutionPick::Daily(date!(2024 - 06 - 01)));
        assert!(source.resolve_solution().is_err());
    }

    #[test]
    fn embedded_lexicon_loads() {
        let lexicon = Lexicon::embedded();
        assert!(!lexicon.solutions().is_empty());
        assert!(lexicon.contains("hábil"));
        assert!(lexicon.contains("bolas"));
    }
}
