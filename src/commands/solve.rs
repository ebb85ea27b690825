//! Board solving command
//!
//! Enumerates every word on a board and scores the lot.

use crate::core::{Board, GameError, Lexicon};
use crate::solver::{Pruning, ScoreCard, WordFinder, score_card};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for solving a board
pub struct SolveConfig {
    pub minimum_length: usize,
    pub pruning: Pruning,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(minimum_length: usize) -> Self {
        Self {
            minimum_length,
            pruning: Pruning::Lexicon,
        }
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub board: Board,
    pub minimum_length: usize,
    pub words: BTreeMap<String, Vec<usize>>,
    pub card: ScoreCard,
    pub duration: Duration,
}

impl SolveResult {
    /// Longest words first, ties alphabetical
    #[must_use]
    pub fn longest(&self, count: usize) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.keys().map(String::as_str).collect();
        words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        words.truncate(count);
        words
    }
}

/// Solve a board with the given lexicon
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if the minimum length is below one.
pub fn solve_board(
    config: &SolveConfig,
    board: Board,
    lexicon: &Lexicon,
) -> Result<SolveResult, GameError> {
    let start = Instant::now();
    let words = WordFinder::new(&board, lexicon, config.minimum_length)?
        .with_pruning(config.pruning)
        .find_all_with_paths();
    let card = score_card(words.keys(), lexicon, config.minimum_length)?;

    Ok(SolveResult {
        board,
        minimum_length: config.minimum_length,
        words,
        card,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::embedded_lexicon;

    #[test]
    fn solve_scenario_board() {
        let board = Board::from_tiles(&["A", "B", "C", "D"]).unwrap();
        let lexicon = Lexicon::from_words(["ab", "ad", "abc", "abd", "abdc"]);

        let result = solve_board(&SolveConfig::new(2), board, &lexicon).unwrap();

        assert_eq!(result.words.len(), 5);
        assert_eq!(result.card.total, 9);
        assert_eq!(result.card.scorable, 5);
        assert_eq!(result.longest(2), ["abdc", "abc"]);
    }

    #[test]
    fn solve_default_board() {
        let lexicon = embedded_lexicon();
        let result = solve_board(&SolveConfig::new(3), Board::default(), &lexicon).unwrap();

        assert!(result.words.contains_key("peace"));
        assert_eq!(result.card.scorable, result.words.len());
        assert!(result.card.total as usize >= result.words.len());
    }

    #[test]
    fn solve_rejects_zero_minimum() {
        let lexicon = embedded_lexicon();
        let result = solve_board(&SolveConfig::new(0), Board::default(), &lexicon);
        assert!(result.is_err());
    }

    #[test]
    fn unpruned_config_gives_same_words() {
        let board = Board::parse("cat dog ear owl").unwrap();
        let lexicon = Lexicon::from_words(["catdog", "dogear", "owlcat", "earowl", "cat"]);
        let pruned = solve_board(&SolveConfig::new(1), board.clone(), &lexicon).unwrap();

        let mut config = SolveConfig::new(1);
        config.pruning = Pruning::None;
        let exhaustive = solve_board(&config, board, &lexicon).unwrap();

        assert_eq!(
            pruned.words.keys().collect::<Vec<_>>(),
            exhaustive.words.keys().collect::<Vec<_>>()
        );
        assert_eq!(pruned.words.len(), 5);
    }
}
