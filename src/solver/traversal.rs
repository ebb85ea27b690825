//! Depth-first backtracking over simple board paths
//!
//! A [`Backtracker`] owns one visited array and one path buffer for the whole
//! traversal and hands them to a [`Visitor`] by reference. A cell is marked
//! before the visitor enters it and unmarked after the visitor leaves it, so
//! the active path never repeats a cell.

use crate::core::{Board, MOORE_OFFSETS};

/// Neighbor order for single-word location: axis-aligned before diagonal
pub const AXIS_FIRST_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// What the visitor wants after entering a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Explore unvisited neighbors
    Descend,
    /// Backtrack without exploring neighbors
    Prune,
    /// End the whole traversal and keep the current path
    Stop,
}

/// Per-cell callbacks driven by a [`Backtracker`]
pub trait Visitor {
    /// Called once `cell` is on `path` and marked visited
    fn enter(&mut self, board: &Board, cell: usize, path: &[usize]) -> Step;

    /// Called before `cell` is taken off the path and unmarked
    fn leave(&mut self, board: &Board, cell: usize);
}

/// Reusable traversal state for one board
pub struct Backtracker<'b> {
    board: &'b Board,
    order: &'static [(isize, isize)],
    visited: Vec<bool>,
    path: Vec<usize>,
}

impl<'b> Backtracker<'b> {
    /// Traversal visiting neighbors in row-major scan order
    #[must_use]
    pub fn new(board: &'b Board) -> Self {
        Self::with_order(board, &MOORE_OFFSETS)
    }

    /// Traversal visiting neighbors in a fixed offset order
    #[must_use]
    pub fn with_order(board: &'b Board, order: &'static [(isize, isize)]) -> Self {
        Self {
            board,
            order,
            visited: vec![false; board.cell_count()],
            path: Vec::with_capacity(board.cell_count()),
        }
    }

    /// Cells on the active path; after a stopped run, the path that stopped it
    #[must_use]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    #[must_use]
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }

    /// Clear any path left behind by a stopped run
    pub fn reset(&mut self) {
        self.path.clear();
        self.visited.fill(false);
    }

    /// Explore every simple path starting at `start`
    ///
    /// Returns `true` if the visitor stopped the traversal.
    pub fn run_from<V: Visitor>(&mut self, start: usize, visitor: &mut V) -> bool {
        debug_assert!(self.path.is_empty(), "previous run left a path behind");
        self.explore(start, visitor)
    }

    /// Explore from every cell in row-major order until the visitor stops
    pub fn run<V: Visitor>(&mut self, visitor: &mut V) -> bool {
        (0..self.board.cell_count()).any(|start| self.run_from(start, visitor))
    }

    fn explore<V: Visitor>(&mut self, cell: usize, visitor: &mut V) -> bool {
        self.visited[cell] = true;
        self.path.push(cell);

        match visitor.enter(self.board, cell, &self.path) {
            Step::Stop => return true,
            Step::Prune => {}
            Step::Descend => {
                let board = self.board;
                let order = self.order;
                for next in board.neighbors_in(cell, order) {
                    if !self.visited[next] && self.explore(next, visitor) {
                        return true;
                    }
                }
            }
        }

        visitor.leave(self.board, cell);
        self.path.pop();
        self.visited[cell] = false;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every path it is shown
    struct PathRecorder {
        paths: Vec<Vec<usize>>,
        max_depth: usize,
    }

    impl Visitor for PathRecorder {
        fn enter(&mut self, _board: &Board, _cell: usize, path: &[usize]) -> Step {
            self.paths.push(path.to_vec());
            if path.len() >= self.max_depth {
                Step::Prune
            } else {
                Step::Descend
            }
        }

        fn leave(&mut self, _board: &Board, _cell: usize) {}
    }

    fn abcd() -> Board {
        Board::from_tiles(&["A", "B", "C", "D"]).unwrap()
    }

    #[test]
    fn all_simple_paths_on_2x2() {
        let board = abcd();
        let mut recorder = PathRecorder {
            paths: Vec::new(),
            max_depth: usize::MAX,
        };
        let stopped = Backtracker::new(&board).run(&mut recorder);

        assert!(!stopped);
        // 4 starts × (1 + 3 + 6 + 6) paths of length 1..=4 on a complete graph K4
        assert_eq!(recorder.paths.len(), 64);
        for path in &recorder.paths {
            assert!(board.is_valid_path(path), "{path:?}");
        }
    }

    #[test]
    fn prune_limits_depth() {
        let board = Board::default();
        let mut recorder = PathRecorder {
            paths: Vec::new(),
            max_depth: 2,
        };
        Backtracker::new(&board).run_from(5, &mut recorder);
        // the start cell plus its eight neighbors
        assert_eq!(recorder.paths.len(), 9);
    }

    #[test]
    fn visited_state_restored_after_run() {
        let board = abcd();
        let mut recorder = PathRecorder {
            paths: Vec::new(),
            max_depth: usize::MAX,
        };
        let mut backtracker = Backtracker::new(&board);
        backtracker.run_from(0, &mut recorder);
        assert!(backtracker.path().is_empty());
        assert!(backtracker.visited.iter().all(|&v| !v));
    }

    struct StopAt(usize);

    impl Visitor for StopAt {
        fn enter(&mut self, _board: &Board, cell: usize, _path: &[usize]) -> Step {
            if cell == self.0 {
                Step::Stop
            } else {
                Step::Descend
            }
        }

        fn leave(&mut self, _board: &Board, _cell: usize) {}
    }

    #[test]
    fn stop_keeps_path() {
        let board = abcd();
        let mut backtracker = Backtracker::with_order(&board, &AXIS_FIRST_OFFSETS);
        assert!(backtracker.run(&mut StopAt(3)));
        // from 0 the first move is down to 2, then right to 3
        assert_eq!(backtracker.path(), &[0, 2, 3]);

        backtracker.reset();
        assert!(backtracker.path().is_empty());
    }
}
