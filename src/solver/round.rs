//! One round of play against a solved board
//!
//! The board is solved once when the round starts; guesses are then checked
//! against the lexicon and traced on the board.

use super::finder::WordFinder;
use super::locator::locate;
use super::scorer::{ScoreCard, points_for_length, score_card};
use crate::core::{Board, GameError, Lexicon};
use std::collections::BTreeMap;

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Accepted {
        word: String,
        points: u32,
        path: Vec<usize>,
    },
    AlreadyFound(String),
    TooShort(String),
    NotInLexicon(String),
    NotOnBoard(String),
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// A board, its solutions and the words found so far
pub struct Round<'a> {
    board: Board,
    lexicon: &'a Lexicon,
    minimum_length: usize,
    solutions: BTreeMap<String, Vec<usize>>,
    found: Vec<String>,
    score: u32,
}

impl<'a> Round<'a> {
    /// Start a round, solving the board up front
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if `minimum_length < 1`.
    pub fn new(board: Board, lexicon: &'a Lexicon, minimum_length: usize) -> Result<Self, GameError> {
        let solutions = WordFinder::new(&board, lexicon, minimum_length)?.find_all_with_paths();
        tracing::info!(
            size = board.size(),
            solutions = solutions.len(),
            "round started"
        );

        Ok(Self {
            board,
            lexicon,
            minimum_length,
            solutions,
            found: Vec::new(),
            score: 0,
        })
    }

    /// Check a guess and record it if it scores
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        let word = input.trim().to_lowercase();

        if word.chars().count() < self.minimum_length {
            return GuessOutcome::TooShort(word);
        }
        if !self.lexicon.contains(&word) {
            return GuessOutcome::NotInLexicon(word);
        }
        if self.found.contains(&word) {
            return GuessOutcome::AlreadyFound(word);
        }

        let path = locate(&self.board, &word);
        if path.is_empty() {
            return GuessOutcome::NotOnBoard(word);
        }

        let points = points_for_length(word.chars().count(), self.minimum_length);
        self.score += points;
        self.found.push(word.clone());
        GuessOutcome::Accepted { word, points, path }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn minimum_length(&self) -> usize {
        self.minimum_length
    }

    /// Words found so far, in the order they were guessed
    #[must_use]
    pub fn found(&self) -> &[String] {
        &self.found
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Every word on the board with one path each
    #[must_use]
    pub const fn solutions(&self) -> &BTreeMap<String, Vec<usize>> {
        &self.solutions
    }

    /// Score card for every word on the board
    #[must_use]
    pub fn possible(&self) -> ScoreCard {
        // minimum length was validated in `new`
        score_card(self.solutions.keys(), self.lexicon, self.minimum_length).unwrap_or_default()
    }

    /// Solutions not yet guessed, sorted
    pub fn missed(&self) -> impl Iterator<Item = &str> {
        self.solutions
            .keys()
            .map(String::as_str)
            .filter(|w| !self.found.iter().any(|f| f == w))
    }
}
