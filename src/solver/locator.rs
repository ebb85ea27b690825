//! Single-word path lookup

use super::traversal::{AXIS_FIRST_OFFSETS, Backtracker, Step, Visitor};
use crate::core::Board;

/// Find one path spelling `word`, or an empty vector if there is none
///
/// Start cells are tried in row-major order and neighbors axis-aligned
/// before diagonal, so the result is deterministic. Matching ignores case;
/// a multi-letter tile must match all of its characters at once.
///
/// # Examples
/// ```
/// use boggle_solver::core::Board;
/// use boggle_solver::solver::locate;
///
/// let board = Board::from_tiles(&["A", "B", "C", "D"]).unwrap();
/// assert_eq!(locate(&board, "abdc"), vec![0, 1, 3, 2]);
/// assert!(locate(&board, "abba").is_empty());
/// ```
#[must_use]
pub fn locate(board: &Board, word: &str) -> Vec<usize> {
    let target = word.to_lowercase();
    if target.is_empty() {
        return Vec::new();
    }

    let mut matcher = Matcher {
        target: &target,
        offsets: Vec::new(),
    };
    let mut backtracker = Backtracker::with_order(board, &AXIS_FIRST_OFFSETS);
    if backtracker.run(&mut matcher) {
        backtracker.into_path()
    } else {
        Vec::new()
    }
}

/// Visitor that consumes the target word one tile at a time
struct Matcher<'w> {
    target: &'w str,
    /// Bytes of `target` matched after each cell on the path
    offsets: Vec<usize>,
}

impl Visitor for Matcher<'_> {
    fn enter(&mut self, board: &Board, cell: usize, _path: &[usize]) -> Step {
        let offset = self.offsets.last().copied().unwrap_or(0);

        if let Some(used) = board.tile_at(cell).match_prefix(&self.target[offset..]) {
            let matched = offset + used;
            self.offsets.push(matched);
            if matched == self.target.len() {
                Step::Stop
            } else {
                Step::Descend
            }
        } else {
            self.offsets.push(offset);
            Step::Prune
        }
    }

    fn leave(&mut self, _board: &Board, _cell: usize) {
        self.offsets.pop();
    }
}
