//! Aggregated keyboard statuses
//!
//! Tracks the best-known status of every letter across all submitted guesses
//! so the virtual keyboard can be coloured. A letter never downgrades: once
//! `Correct` it stays `Correct`, and `Present` is never overwritten by
//! `Absent` (a duplicate occurrence graded `Absent` in one guess says nothing
//! about the letter's best placement elsewhere).

use crate::core::{Grade, LetterStatus, Word};
use rustc_hash::FxHashMap;

/// Best-known status per normalized letter, derived from the guess history
#[derive(Debug, Clone, Default)]
pub struct KeyStatusMap {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl KeyStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one graded guess into the map
    ///
    /// Applies the upgrade-only rule per position letter. Merging the same
    /// graded guess twice is a no-op the second time.
    ///
    /// # Examples
    /// ```
    /// use palavre::core::{Grade, KeyStatusMap, LetterStatus, Word};
    ///
    /// let solution = Word::new("hábil").unwrap();
    /// let guess = Word::new("bolas").unwrap();
    /// let grade = Grade::calculate(&guess, &solution);
    ///
    /// let mut keys = KeyStatusMap::new();
    /// keys.merge(&guess, &grade);
    /// assert_eq!(keys.status_of(b'B'), Some(LetterStatus::Present));
    /// assert_eq!(keys.status_of(b'O'), Some(LetterStatus::Absent));
    /// assert_eq!(keys.status_of(b'Z'), None);
    /// ```
    pub fn merge(&mut self, guess: &Word, grade: &Grade) {
        for (i, &letter) in guess.letters().iter().enumerate() {
            let status = grade[i];
            let entry = self.statuses.entry(letter).or_insert(status);
            // Upgrade-only: LetterStatus orders Absent < Present < Correct
            if status > *entry {
                *entry = status;
            }
        }
    }

    /// Best-known status of a letter, `None` if never guessed
    ///
    /// Accepts either case; lookup is on the normalized uppercase letter.
    #[must_use]
    pub fn status_of(&self, letter: u8) -> Option<LetterStatus> {
        self.statuses.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Number of distinct letters with a known status
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn graded(guess: &str, solution: &str) -> (Word, Grade) {
        let guess = Word::new(guess).unwrap();
        let grade = Grade::calculate(&guess, &Word::new(solution).unwrap());
        (guess, grade)
    }

    #[test]
    fn merge_records_all_guess_letters() {
        let mut keys = KeyStatusMap::new();
        let (guess, grade) = graded("bolas", "hábil");
        keys.merge(&guess, &grade);

        assert_eq!(keys.status_of(b'B'), Some(Present));
        assert_eq!(keys.status_of(b'O'), Some(Absent));
        assert_eq!(keys.status_of(b'L'), Some(Present));
        assert_eq!(keys.status_of(b'A'), Some(Present));
        assert_eq!(keys.status_of(b'S'), Some(Absent));
        assert_eq!(keys.len(), 5);
    }

    #[test]
    fn merge_is_idempotent() {
        let mut once = KeyStatusMap::new();
        let mut twice = KeyStatusMap::new();
        let (guess, grade) = graded("bolas", "hábil");

        once.merge(&guess, &grade);
        twice.merge(&guess, &grade);
        twice.merge(&guess, &grade);

        for letter in *guess.letters() {
            assert_eq!(once.status_of(letter), twice.status_of(letter));
        }
    }

    #[test]
    fn merge_upgrades_present_to_correct() {
        let mut keys = KeyStatusMap::new();

        // A misplaced first...
        let (guess, grade) = graded("salto", "amigo");
        keys.merge(&guess, &grade);
        assert_eq!(keys.status_of(b'A'), Some(Present));

        // ...then exact
        let (guess, grade) = graded("anexo", "amigo");
        keys.merge(&guess, &grade);
        assert_eq!(keys.status_of(b'A'), Some(Correct));
    }

    #[test]
    fn merge_never_downgrades_correct() {
        let mut keys = KeyStatusMap::new();

        let (guess, grade) = graded("anexo", "amigo");
        keys.merge(&guess, &grade);
        assert_eq!(keys.status_of(b'A'), Some(Correct));

        // A at a wrong position later must not demote the key
        let (guess, grade) = graded("salta", "amigo");
        keys.merge(&guess, &grade);
        assert_eq!(keys.status_of(b'A'), Some(Correct));
    }

    #[test]
    fn merge_never_downgrades_present_to_absent() {
        let mut keys = KeyStatusMap::new();

        // One L in HABIL: first L of LLAMA grades Present, second Absent.
        // The key must keep the Present from the same merge...
        let (guess, grade) = graded("llama", "hábil");
        keys.merge(&guess, &grade);
        assert_eq!(keys.status_of(b'L'), Some(Present));

        // ...and keep it across a later guess where L grades Absent
        let (guess, grade) = graded("toldo", "fogão");
        assert_eq!(grade.statuses()[2], Absent);
        keys.merge(&guess, &grade);
        assert_eq!(keys.status_of(b'L'), Some(Present));
    }

    #[test]
    fn status_lookup_is_case_insensitive() {
        let mut keys = KeyStatusMap::new();
        let (guess, grade) = graded("bolas", "hábil");
        keys.merge(&guess, &grade);
        assert_eq!(keys.status_of(b'b'), Some(Present));
    }

    #[test]
    fn empty_map() {
        let keys = KeyStatusMap::new();
        assert!(keys.is_empty());
        assert_eq!(keys.status_of(b'A'), None);
    }
}
