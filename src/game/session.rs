//! Game session state machine
//!
//! A [`GameSession`] owns everything a running game needs: the resolved
//! solution, the submitted-guess history with grades, the letters being
//! typed, the aggregated keyboard statuses, and the lifecycle status. The
//! word source is injected so tests run against a fixed in-memory lexicon.
//!
//! All transitions are synchronous and happen one input event at a time.
//! Letter input is a silent no-op when it cannot apply (rapid key presses
//! are not errors); only guess submission can fail, and a failed submission
//! never changes state.

use crate::core::{Grade, KeyStatusMap, MAX_TRIES, WORD_LENGTH, Word};
use crate::wordlists::{WordSource, WordSourceError};
use std::fmt;

/// Lifecycle of a session; transitions only move forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Whether the session accepts no further input
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why a submission was rejected; the session is unchanged in every case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The in-progress guess is shorter than [`WORD_LENGTH`]
    InsufficientLetters,
    /// The word is not in the accepted-guesses set
    UnknownWord,
    /// The game already ended
    GameOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientLetters => write!(f, "Not enough letters"),
            Self::UnknownWord => write!(f, "Word not in the accepted list"),
            Self::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// A guess that has been submitted and graded; immutable from then on
#[derive(Debug, Clone)]
pub struct SubmittedGuess {
    pub word: Word,
    pub grade: Grade,
}

/// Render-ready view of one board row
#[derive(Debug, Clone, Copy)]
pub enum Row<'a> {
    /// A submitted guess with its grades
    Submitted(&'a SubmittedGuess),
    /// The row currently being typed (only while playing)
    Active(&'a str),
    /// Not reached yet
    Blank,
}

/// One game: a hidden solution, up to [`MAX_TRIES`] graded guesses
pub struct GameSession<S: WordSource> {
    source: S,
    solution: Word,
    guesses: Vec<SubmittedGuess>,
    current: String,
    keyboard: KeyStatusMap,
    status: GameStatus,
}

impl<S: WordSource> GameSession<S> {
    /// Start a session by resolving the solution from the word source
    ///
    /// # Errors
    /// Returns [`WordSourceError`] when the source has no solution to offer;
    /// no session exists in that case.
    pub fn new(source: S) -> Result<Self, WordSourceError> {
        let solution = source.resolve_solution()?;
        Ok(Self {
            source,
            solution,
            guesses: Vec::with_capacity(MAX_TRIES),
            current: String::with_capacity(WORD_LENGTH),
            keyboard: KeyStatusMap::new(),
            status: GameStatus::Playing,
        })
    }

    /// Append a typed letter to the in-progress guess
    ///
    /// Silently ignored unless the game is playing, the guess has room, and
    /// `ch` is an ASCII letter. Input devices send plain letters; accents
    /// never enter a guess.
    pub fn push_letter(&mut self, ch: char) {
        if self.status == GameStatus::Playing
            && self.current.len() < WORD_LENGTH
            && ch.is_ascii_alphabetic()
        {
            self.current.push(ch.to_ascii_uppercase());
        }
    }

    /// Remove the last typed letter; no-op when empty or finished
    pub fn pop_letter(&mut self) {
        if self.status == GameStatus::Playing {
            self.current.pop();
        }
    }

    /// Submit the in-progress guess
    ///
    /// On success the guess joins the history, the keyboard map absorbs its
    /// grades, the typed letters clear, and the status advances (`Won` on a
    /// match, `Lost` on the final miss). The returned [`Grade`] is what the
    /// presentation layer animates.
    ///
    /// # Errors
    /// [`SubmitError::GameOver`] after the game ended,
    /// [`SubmitError::InsufficientLetters`] below five letters, and
    /// [`SubmitError::UnknownWord`] for words the source rejects. The typed
    /// letters stay in place on `UnknownWord` so the player can edit them.
    pub fn submit_guess(&mut self) -> Result<Grade, SubmitError> {
        if self.status != GameStatus::Playing {
            return Err(SubmitError::GameOver);
        }
        if self.current.len() != WORD_LENGTH {
            return Err(SubmitError::InsufficientLetters);
        }
        if !self.source.is_valid_guess(&self.current) {
            return Err(SubmitError::UnknownWord);
        }

        // Typed letters are ASCII alphabetic and exactly five, so this
        // cannot fail; route the impossible case as UnknownWord anyway.
        let word = Word::new(&self.current).map_err(|_| SubmitError::UnknownWord)?;

        let grade = Grade::calculate(&word, &self.solution);
        self.keyboard.merge(&word, &grade);
        let is_win = word == self.solution;
        self.guesses.push(SubmittedGuess { word, grade });
        self.current.clear();

        if is_win {
            self.status = GameStatus::Won;
        } else if self.guesses.len() == MAX_TRIES {
            self.status = GameStatus::Lost;
        }

        Ok(grade)
    }

    /// Current lifecycle status
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The solution, accents preserved (reveal-on-loss, share text)
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Submitted guesses in chronological order
    #[must_use]
    pub fn guesses(&self) -> &[SubmittedGuess] {
        &self.guesses
    }

    /// The letters typed so far for the next guess
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    /// Aggregated best-known status per letter
    #[must_use]
    pub const fn keyboard(&self) -> &KeyStatusMap {
        &self.keyboard
    }

    /// Number of guesses already submitted
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    /// Render-ready view of board row `index` (0..[`MAX_TRIES`])
    ///
    /// The active row only exists while playing, directly below the last
    /// submitted guess.
    #[must_use]
    pub fn row(&self, index: usize) -> Row<'_> {
        if let Some(submitted) = self.guesses.get(index) {
            Row::Submitted(submitted)
        } else if self.status == GameStatus::Playing && index == self.guesses.len() {
            Row::Active(&self.current)
        } else {
            Row::Blank
        }
    }

    /// All board rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..MAX_TRIES).map(|i| self.row(i))
    }
}
