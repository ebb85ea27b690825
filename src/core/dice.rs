//! Random board generation from Boggle dice

use super::board::Board;
use super::error::GameError;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// The sixteen dice of a 4×4 game
pub const CLASSIC_DICE: [&str; 16] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY", "DISTTY",
    "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNUQ", "HLNNRZ",
];

/// The twenty-five dice of a 5×5 game
pub const BIG_DICE: [&str; 25] = [
    "AAAFRS", "AAEEEE", "AAFIRS", "ADENNN", "AEEEEM", "AEEGMU", "AEGMNN", "AFIRSY", "BJKQXZ",
    "CCENST", "CEIILT", "CEILPT", "CEIPST", "DDHNOT", "DHHLOR", "DHLNOR", "DHLNOR", "EIIITT",
    "EMOTTT", "ENSSSU", "FIPRSY", "GORRVW", "IPRRRY", "NOOTUW", "OOOTTU",
];

/// Which physical dice a board is rolled from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiceSet {
    Classic,
    Big,
}

impl DiceSet {
    /// Dice set that matches a board side, if one exists
    #[must_use]
    pub const fn for_size(size: usize) -> Option<Self> {
        match size {
            4 => Some(Self::Classic),
            5 => Some(Self::Big),
            _ => None,
        }
    }

    #[must_use]
    pub const fn dice(self) -> &'static [&'static str] {
        match self {
            Self::Classic => &CLASSIC_DICE,
            Self::Big => &BIG_DICE,
        }
    }
}

/// Roll a random N×N board
///
/// Sizes 4 and 5 use their own dice set, shuffled across the grid. Any other
/// size draws dice from the big set with replacement. A `Q` face becomes the
/// `Qu` tile.
///
/// # Errors
/// Returns `GameError::InvalidInput` if `size < 2`.
pub fn random_board<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Board, GameError> {
    if size < 2 {
        return Err(GameError::invalid("board must be at least 2x2"));
    }

    let cells = size * size;
    let mut dice: Vec<&str> = match DiceSet::for_size(size) {
        Some(set) => set.dice().to_vec(),
        None => (0..cells)
            .filter_map(|_| BIG_DICE.choose(rng).copied())
            .collect(),
    };
    dice.shuffle(rng);

    let tiles: Vec<String> = dice.iter().map(|die| roll(die, rng)).collect();
    Board::from_tiles(&tiles)
}

fn roll<R: Rng + ?Sized>(die: &str, rng: &mut R) -> String {
    let faces = die.as_bytes();
    let face = faces[rng.random_range(0..faces.len())] as char;
    if face == 'Q' {
        "Qu".to_string()
    } else {
        face.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn dice_sets_have_one_die_per_cell() {
        assert_eq!(DiceSet::Classic.dice().len(), 16);
        assert_eq!(DiceSet::Big.dice().len(), 25);
        assert!(
            CLASSIC_DICE
                .iter()
                .chain(BIG_DICE.iter())
                .all(|d| d.len() == 6)
        );
    }

    #[test]
    fn random_board_sizes() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in 2..=6 {
            let board = random_board(size, &mut rng).unwrap();
            assert_eq!(board.size(), size);
            assert_eq!(board.cell_count(), size * size);
        }
    }

    #[test]
    fn random_board_rejects_tiny() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_board(1, &mut rng).is_err());
        assert!(random_board(0, &mut rng).is_err());
    }

    #[test]
    fn seeded_boards_repeat() {
        let a = random_board(4, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = random_board(4, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn q_face_becomes_qu() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(roll("QQQQQQ", &mut rng), "Qu");
        }
        assert_eq!(roll("AAAAAA", &mut rng), "A");
    }

    #[test]
    fn classic_board_uses_each_die_once() {
        let board = random_board(4, &mut StdRng::seed_from_u64(3)).unwrap();
        // Every tile must be a face of some classic die
        for tile in board.tiles() {
            let face = tile.text().chars().next().unwrap();
            assert!(CLASSIC_DICE.iter().any(|d| d.contains(face)));
        }
    }
}
