//! Guess grading
//!
//! A `Grade` is the ordered per-letter feedback for one submitted guess:
//! green (correct position), yellow (present elsewhere) or gray (absent).
//! Duplicate letters are handled the way the game expects: a letter can only
//! be credited as many times as it occurs in the solution, with exact
//! positions credited first.

use crate::core::{WORD_LENGTH, Word};
use std::fmt;
use std::ops::Index;

/// Feedback class for a single guessed letter
///
/// The ordering matters: `Absent < Present < Correct` is the upgrade order
/// used when aggregating keyboard statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter does not occur (or its occurrences are already accounted for)
    Absent,
    /// Letter occurs in the solution but at a different position
    Present,
    /// Letter is at exactly this position
    Correct,
}

impl LetterStatus {
    /// The share-grid glyph for this status
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Graded feedback for one full guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade([LetterStatus; WORD_LENGTH]);

impl Grade {
    /// All greens (winning guess)
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Grade `guess` against `solution`
    ///
    /// Both words compare through their normalized forms, so accents on
    /// either side never affect the outcome.
    ///
    /// # Algorithm
    /// Two passes over the normalized letters:
    /// 1. Exact matches become `Correct` and consume one occurrence of the
    ///    letter from the solution's remaining pool.
    /// 2. Every other position becomes `Present` while the pool still holds
    ///    that letter, else `Absent`.
    ///
    /// The pass order is what makes duplicates come out right: with one `L`
    /// in the solution and two in the guess, only one guess position earns
    /// credit and the other is `Absent`.
    ///
    /// # Examples
    /// ```
    /// use palavre::core::{Grade, LetterStatus::*, Word};
    ///
    /// let solution = Word::new("hábil").unwrap();
    /// let guess = Word::new("bolas").unwrap();
    /// let grade = Grade::calculate(&guess, &solution);
    /// assert_eq!(grade.statuses(), &[Present, Absent, Present, Present, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut remaining = solution.letter_counts();

        // First pass: exact position matches
        for (i, status) in statuses.iter_mut().enumerate() {
            if guess.letter_at(i) == solution.letter_at(i) {
                *status = LetterStatus::Correct;
                if let Some(count) = remaining.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-but-misplaced, bounded by the remaining pool
        for (i, status) in statuses.iter_mut().enumerate() {
            if *status == LetterStatus::Absent
                && let Some(count) = remaining.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                *status = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(statuses)
    }

    /// The per-position statuses in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Whether every position is `Correct`
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::PERFECT
    }

    /// Iterate over the statuses in position order
    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }

    /// Render as a share-grid line
    ///
    /// # Examples
    /// ```
    /// use palavre::core::{Grade, Word};
    ///
    /// let grade = Grade::calculate(
    ///     &Word::new("bolas").unwrap(),
    ///     &Word::new("hábil").unwrap(),
    /// );
    /// assert_eq!(grade.to_glyphs(), "🟨⬛🟨🟨⬛");
    /// ```
    #[must_use]
    pub fn to_glyphs(&self) -> String {
        self.0.iter().map(|s| s.glyph()).collect()
    }
}

impl Index<usize> for Grade {
    type Output = LetterStatus;

    fn index(&self, position: usize) -> &LetterStatus {
        &self.0[position]
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_glyphs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn grade(guess: &str, solution: &str) -> Grade {
        Grade::calculate(&Word::new(guess).unwrap(), &Word::new(solution).unwrap())
    }

    #[test]
    fn status_upgrade_order() {
        assert!(Absent < Present);
        assert!(Present < Correct);
    }

    #[test]
    fn grade_exact_match() {
        assert_eq!(grade("habil", "habil"), Grade::PERFECT);
        assert!(grade("habil", "habil").is_win());
    }

    #[test]
    fn grade_exact_match_ignores_accents() {
        assert_eq!(grade("habil", "hábil"), Grade::PERFECT);
        assert_eq!(grade("hábil", "habil"), Grade::PERFECT);
    }

    #[test]
    fn grade_no_overlap() {
        // TORTO and HABIL share no letters
        let g = grade("torto", "hábil");
        assert_eq!(g.statuses(), &[Absent; WORD_LENGTH]);
        assert!(!g.is_win());
    }

    #[test]
    fn grade_bolas_against_habil() {
        // B, L and A are in HABIL but misplaced; O and S are absent
        let g = grade("bolas", "hábil");
        assert_eq!(g.statuses(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn grade_duplicate_guess_letters_single_in_solution() {
        // ABLED has one L; only the first L of LLAMA earns Present,
        // the second is Absent. The second A is likewise exhausted.
        let g = grade("llama", "abled");
        assert_eq!(g.statuses(), &[Present, Absent, Present, Absent, Absent]);
    }

    #[test]
    fn grade_duplicate_letters_green_consumes_pool() {
        // Solution ARARA: three As, two Rs. Guess ARROZ: A and R exact,
        // second R still backed by the pool, O and Z absent.
        let g = grade("arroz", "arara");
        assert_eq!(g.statuses(), &[Correct, Correct, Present, Absent, Absent]);
    }

    #[test]
    fn grade_exact_match_takes_priority_over_earlier_present() {
        // Solution TORTA, guess TROCA: both Ts credited? TROCA has one T
        // (exact at 0); R misplaced, O misplaced, C absent, A exact.
        let g = grade("troca", "torta");
        assert_eq!(g.statuses(), &[Correct, Present, Present, Absent, Correct]);
    }

    #[test]
    fn grade_is_win_only_for_matching_words() {
        for (guess, solution, win) in [
            ("termo", "sagaz", false),
            ("arara", "arroz", false),
            ("festa", "festa", true),
            ("poção", "pocao", true),
            ("bolas", "hábil", false),
        ] {
            assert_eq!(grade(guess, solution).is_win(), win, "{guess} vs {solution}");
        }
    }

    #[test]
    fn grade_indexing_and_iteration() {
        let g = grade("bolas", "hábil");
        assert_eq!(g[0], Present);
        assert_eq!(g[1], Absent);
        let collected: Vec<_> = g.iter().collect();
        assert_eq!(collected.len(), WORD_LENGTH);
        assert_eq!(collected[3], Present);
    }

    #[test]
    fn grade_glyphs() {
        assert_eq!(Grade::PERFECT.to_glyphs(), "🟩🟩🟩🟩🟩");
        assert_eq!(grade("torto", "hábil").to_glyphs(), "⬛⬛⬛⬛⬛");
        assert_eq!(grade("bolas", "hábil").to_glyphs(), "🟨⬛🟨🟨⬛");
    }
}
