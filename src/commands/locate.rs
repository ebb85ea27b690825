//! Path lookup command
//!
//! Traces a single word on the board; needs no lexicon.

use crate::core::Board;
use crate::solver::locate;

/// Result of tracing a word
pub struct LocateResult {
    pub word: String,
    pub path: Vec<usize>,
}

impl LocateResult {
    #[must_use]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// `(row, col)` of every cell on the path
    #[must_use]
    pub fn coordinates(&self, board: &Board) -> Vec<(usize, usize)> {
        self.path.iter().map(|&i| board.position(i)).collect()
    }
}

/// Trace `word` on the board
#[must_use]
pub fn locate_word(board: &Board, word: &str) -> LocateResult {
    LocateResult {
        word: word.to_string(),
        path: locate(board, word),
    }
}
