//! Exhaustive word enumeration
//!
//! Runs one independent backtracking search per start cell and collects every
//! lexicon word spelled along a simple path. Start cells are searched in
//! parallel; each worker owns its own traversal state.

use super::traversal::{Backtracker, Step, Visitor};
use crate::core::{Board, GameError, Lexicon, NodeId, check_minimum_length};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

/// How the enumeration cuts off hopeless branches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Stop descending once no lexicon word starts with the current string
    #[default]
    Lexicon,
    /// Explore every simple path (exponential in path length)
    None,
}

/// Finds every lexicon word on a board
pub struct WordFinder<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
    minimum_length: usize,
    pruning: Pruning,
}

impl<'a> WordFinder<'a> {
    /// Create a finder for words of at least `minimum_length` characters
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if `minimum_length < 1`.
    pub fn new(
        board: &'a Board,
        lexicon: &'a Lexicon,
        minimum_length: usize,
    ) -> Result<Self, GameError> {
        check_minimum_length(minimum_length)?;
        Ok(Self {
            board,
            lexicon,
            minimum_length,
            pruning: Pruning::default(),
        })
    }

    #[must_use]
    pub const fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// All words on the board, sorted
    #[must_use]
    pub fn find_all(&self) -> BTreeSet<String> {
        self.find_all_with_paths().into_keys().collect()
    }

    /// All words on the board, each with one path spelling it
    ///
    /// The path kept for a word is the first one found when start cells are
    /// taken in row-major order.
    #[must_use]
    pub fn find_all_with_paths(&self) -> BTreeMap<String, Vec<usize>> {
        let started = Instant::now();

        let found = (0..self.board.cell_count())
            .into_par_iter()
            .map(|start| self.search_from(start))
            .reduce(BTreeMap::new, |mut acc, part| {
                for (word, path) in part {
                    acc.entry(word).or_insert(path);
                }
                acc
            });

        tracing::debug!(
            words = found.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            pruning = ?self.pruning,
            "enumeration finished"
        );
        found
    }

    fn search_from(&self, start: usize) -> BTreeMap<String, Vec<usize>> {
        let mut collector = Collector {
            lexicon: self.lexicon,
            minimum_length: self.minimum_length,
            pruning: self.pruning,
            word: String::new(),
            frames: Vec::new(),
            found: BTreeMap::new(),
        };
        Backtracker::new(self.board).run_from(start, &mut collector);
        collector.found
    }
}

/// Enumerate every word of at least `minimum_length` characters on the board
///
/// # Errors
/// Returns `GameError::InvalidInput` if `minimum_length < 1`.
///
/// # Examples
/// ```
/// use boggle_solver::core::{Board, Lexicon};
/// use boggle_solver::solver::find_all;
///
/// let board = Board::from_tiles(&["A", "B", "C", "D"]).unwrap();
/// let lexicon = Lexicon::from_words(["ab", "ad", "abc", "abd", "abdc"]);
///
/// let words = find_all(&board, &lexicon, 2).unwrap();
/// assert_eq!(words.into_iter().collect::<Vec<_>>(), ["ab", "abc", "abd", "abdc", "ad"]);
/// ```
pub fn find_all(
    board: &Board,
    lexicon: &Lexicon,
    minimum_length: usize,
) -> Result<BTreeSet<String>, GameError> {
    Ok(WordFinder::new(board, lexicon, minimum_length)?.find_all())
}

/// Bookkeeping for one cell on the active path
struct Frame {
    char_len: usize,
    node: Option<NodeId>,
}

/// Visitor that accumulates the spelled string and records lexicon hits
struct Collector<'a> {
    lexicon: &'a Lexicon,
    minimum_length: usize,
    pruning: Pruning,
    word: String,
    frames: Vec<Frame>,
    found: BTreeMap<String, Vec<usize>>,
}

impl Visitor for Collector<'_> {
    fn enter(&mut self, board: &Board, cell: usize, path: &[usize]) -> Step {
        let tile = board.tile_at(cell);
        let (parent_len, parent_node) = self
            .frames
            .last()
            .map_or((0, Some(self.lexicon.root())), |f| (f.char_len, f.node));

        self.word.push_str(tile.folded());
        let char_len = parent_len + tile.char_len();

        let (is_word, step) = match self.pruning {
            Pruning::Lexicon => {
                let node = parent_node.and_then(|n| self.lexicon.walk(n, tile.folded()));
                self.frames.push(Frame { char_len, node });
                match node {
                    Some(n) if self.lexicon.has_children(n) => (self.lexicon.is_word(n), Step::Descend),
                    Some(n) => (self.lexicon.is_word(n), Step::Prune),
                    None => (false, Step::Prune),
                }
            }
            Pruning::None => {
                self.frames.push(Frame { char_len, node: None });
                (self.lexicon.contains(&self.word), Step::Descend)
            }
        };

        if is_word && char_len >= self.minimum_length && !self.found.contains_key(&self.word) {
            self.found.insert(self.word.clone(), path.to_vec());
        }
        step
    }

    fn leave(&mut self, board: &Board, cell: usize) {
        let tile_len = board.tile_at(cell).folded().len();
        self.word.truncate(self.word.len() - tile_len);
        self.frames.pop();
    }
}
