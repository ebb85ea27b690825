//! Boggle board representation
//!
//! An N×N grid of tiles stored in row-major order. Cells are addressed either
//! by `(row, col)` or by the linear index `row * N + col`.

use super::error::GameError;
use rustc_hash::FxHashSet;
use std::fmt;

/// Moore neighborhood offsets in row-major scan order
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Board used until a caller sets its own
pub const DEFAULT_TILES: [&str; 16] = [
    "E", "E", "C", "A", "A", "L", "E", "P", "H", "N", "B", "O", "Qu", "T", "T", "Y",
];

/// A single letter tile
///
/// Tiles may hold more than one character (the classic `Qu` face). The
/// lowercase form is kept alongside the original text so traversals never
/// re-fold it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    text: String,
    folded: String,
}

impl Tile {
    /// Create a tile from its face text
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the text is empty.
    pub fn new(text: impl Into<String>) -> Result<Self, GameError> {
        let text: String = text.into();
        if text.is_empty() {
            return Err(GameError::invalid("tiles must hold at least one character"));
        }
        let folded = text.to_lowercase();
        Ok(Self { text, folded })
    }

    /// Face text as given
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercase face text
    #[inline]
    #[must_use]
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Number of characters this tile contributes to a word
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.folded.chars().count()
    }

    /// Match this tile against the start of an already-lowercased string
    ///
    /// Returns the number of bytes consumed on a match.
    #[inline]
    #[must_use]
    pub fn match_prefix(&self, rest: &str) -> Option<usize> {
        rest.starts_with(self.folded.as_str())
            .then_some(self.folded.len())
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Square grid of tiles, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Build a board from a flat row-major tile sequence
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the sequence is empty, its length is
    /// not a perfect square, the side is smaller than 2, or any tile is empty.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    ///
    /// let board = Board::from_tiles(&["A", "B", "C", "D"]).unwrap();
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board.tile_at(3).text(), "D");
    ///
    /// assert!(Board::from_tiles(&["A", "B", "C"]).is_err());
    /// ```
    pub fn from_tiles<S: AsRef<str>>(tiles: &[S]) -> Result<Self, GameError> {
        if tiles.is_empty() {
            return Err(GameError::invalid("board has no tiles"));
        }

        let size = tiles.len().isqrt();
        if size * size != tiles.len() {
            return Err(GameError::invalid(format!(
                "{} tiles do not form a square board",
                tiles.len()
            )));
        }
        if size < 2 {
            return Err(GameError::invalid("board must be at least 2x2"));
        }

        let tiles = tiles
            .iter()
            .map(|t| Tile::new(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(size, "board built");
        Ok(Self { size, tiles })
    }

    /// Parse a board from text
    ///
    /// Tiles are separated by whitespace or commas. A single token is split
    /// into one tile per character, so `"abcd"` is a 2×2 board.
    ///
    /// # Errors
    /// Same conditions as [`Board::from_tiles`].
    pub fn parse(text: &str) -> Result<Self, GameError> {
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        if let [single] = tokens.as_slice() {
            let chars: Vec<String> = single.chars().map(String::from).collect();
            return Self::from_tiles(&chars);
        }
        Self::from_tiles(&tokens)
    }

    /// Side length N
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, N²
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// All tiles in row-major order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at a linear index
    ///
    /// # Panics
    /// Panics if `index >= cell_count()`
    #[inline]
    #[must_use]
    pub fn tile_at(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }

    /// `(row, col)` of a linear index
    #[inline]
    #[must_use]
    pub const fn position(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Linear index of `(row, col)`
    #[inline]
    #[must_use]
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn offset(&self, index: usize, (dr, dc): (isize, isize)) -> Option<usize> {
        let (row, col) = self.position(index);
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < self.size && col < self.size).then(|| self.index(row, col))
    }

    /// In-bounds Moore neighbors of a cell, in row-major scan order
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors_in(index, &MOORE_OFFSETS)
    }

    /// In-bounds neighbors following a caller-supplied offset order
    pub fn neighbors_in<'a>(
        &'a self,
        index: usize,
        order: &'a [(isize, isize)],
    ) -> impl Iterator<Item = usize> + 'a {
        order
            .iter()
            .filter_map(move |&delta| self.offset(index, delta))
    }

    /// Two distinct in-bounds cells that touch horizontally, vertically or diagonally
    #[must_use]
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        if a == b || a >= self.cell_count() || b >= self.cell_count() {
            return false;
        }
        let (ra, ca) = self.position(a);
        let (rb, cb) = self.position(b);
        ra.abs_diff(rb) <= 1 && ca.abs_diff(cb) <= 1
    }

    /// Check that a path is non-empty, in bounds, adjacent step to step and never revisits a cell
    #[must_use]
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        if path.is_empty() || path.iter().any(|&i| i >= self.cell_count()) {
            return false;
        }

        if !path.windows(2).all(|w| self.are_adjacent(w[0], w[1])) {
            return false;
        }

        let unique: FxHashSet<_> = path.iter().collect();
        unique.len() == path.len()
    }

    /// Lowercase string spelled by a path
    #[must_use]
    pub fn spell(&self, path: &[usize]) -> String {
        path.iter()
            .map(|&i| self.tiles[i].folded())
            .collect()
    }

    /// Rows separated by newlines, tiles separated by spaces
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in self.tiles.chunks(self.size) {
            let line: Vec<&str> = row.iter().map(Tile::text).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_tiles(&DEFAULT_TILES).expect("default tiles form a 4x4 board")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> Board {
        Board::from_tiles(&["A", "B", "C", "D"]).unwrap()
    }

    #[test]
    fn board_from_square_sequence() {
        let board = abcd();
        assert_eq!(board.size(), 2);
        assert_eq!(board.cell_count(), 4);
        assert_eq!(board.tile_at(0).text(), "A");
        assert_eq!(board.tile_at(2).folded(), "c");
    }

    #[test]
    fn board_rejects_bad_shapes() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Board::from_tiles(&empty),
            Err(GameError::InvalidInput(_))
        ));
        assert!(Board::from_tiles(&["A"]).is_err()); // 1x1
        assert!(Board::from_tiles(&["A", "B", "C"]).is_err());
        assert!(Board::from_tiles(&["A", "B", "C", "D", "E"]).is_err());
    }

    #[test]
    fn board_rejects_empty_tile() {
        assert!(matches!(
            Board::from_tiles(&["A", "", "C", "D"]),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn position_and_index_agree() {
        let board = Board::default();
        for i in 0..board.cell_count() {
            let (row, col) = board.position(i);
            assert_eq!(board.index(row, col), i);
        }
        assert_eq!(board.position(6), (1, 2));
    }

    #[test]
    fn neighbor_counts() {
        let board = Board::default();
        assert_eq!(board.neighbors(0).count(), 3); // corner
        assert_eq!(board.neighbors(1).count(), 5); // edge
        assert_eq!(board.neighbors(5).count(), 8); // interior
        assert_eq!(board.neighbors(15).count(), 3);
    }

    #[test]
    fn neighbors_are_adjacent() {
        let board = Board::default();
        for i in 0..board.cell_count() {
            for n in board.neighbors(i) {
                assert!(board.are_adjacent(i, n), "{i} -> {n}");
            }
        }
    }

    #[test]
    fn neighbors_follow_given_order() {
        let board = Board::default();
        let order = [(1, 0), (0, 1), (-1, 0)];
        let got: Vec<usize> = board.neighbors_in(0, &order).collect();
        assert_eq!(got, vec![4, 1]);
    }

    #[test]
    fn all_cells_of_2x2_are_adjacent() {
        let board = abcd();
        for a in 0..4 {
            for b in 0..4 {
                assert_eq!(board.are_adjacent(a, b), a != b);
            }
        }
    }

    #[test]
    fn adjacency_rejects_wraparound() {
        let board = Board::default();
        // 3 is the end of row 0, 4 the start of row 1
        assert!(!board.are_adjacent(3, 4));
        assert!(!board.are_adjacent(0, 16));
    }

    #[test]
    fn valid_paths() {
        let board = Board::default();
        assert!(board.is_valid_path(&[0, 1, 5, 4]));
        assert!(!board.is_valid_path(&[]));
        assert!(!board.is_valid_path(&[0, 2]));
        assert!(!board.is_valid_path(&[0, 1, 0]));
        assert!(!board.is_valid_path(&[0, 99]));
    }

    #[test]
    fn spell_uses_lowercase_tiles() {
        let board = Board::default();
        assert_eq!(board.spell(&[12, 13]), "qut");
    }

    #[test]
    fn render_rows() {
        assert_eq!(abcd().render(), "A B\nC D\n");
        assert_eq!(format!("{}", abcd()), "A B\nC D\n");
    }

    #[test]
    fn parse_single_token_and_separated() {
        assert_eq!(Board::parse("abcd").unwrap().tile_at(1).text(), "b");
        let board = Board::parse("Qu,a b\nc").unwrap();
        assert_eq!(board.tile_at(0).text(), "Qu");
        assert_eq!(board.size(), 2);
        assert!(Board::parse("").is_err());
    }

    #[test]
    fn tile_prefix_match() {
        let tile = Tile::new("Qu").unwrap();
        assert_eq!(tile.match_prefix("quit"), Some(2));
        assert_eq!(tile.match_prefix("q"), None);
        assert_eq!(tile.char_len(), 2);
        assert!(Tile::new("").is_err());
    }
}
