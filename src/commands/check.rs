//! Word check command
//!
//! Reports whether a word is in the lexicon, whether anything extends it, and
//! where it sits on the board.

use super::locate::{LocateResult, locate_word};
use crate::core::{Board, GameError, Lexicon, check_minimum_length};
use crate::solver::scorer::points_for_length;

/// Result of checking a word
pub struct CheckResult {
    pub word: String,
    pub is_word: bool,
    pub is_prefix: bool,
    pub location: LocateResult,
    /// Points the word is worth if it is a word on the board
    pub points: u32,
}

/// Check a word against the lexicon and the board
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if the minimum length is below one.
pub fn check_word(
    word: &str,
    board: &Board,
    lexicon: &Lexicon,
    minimum_length: usize,
) -> Result<CheckResult, GameError> {
    check_minimum_length(minimum_length)?;

    let folded = word.trim().to_lowercase();
    let is_word = lexicon.contains(&folded);
    let is_prefix = lexicon.has_word_with_prefix(&folded);
    let location = locate_word(board, &folded);

    let points = if is_word && location.found() {
        points_for_length(folded.chars().count(), minimum_length)
    } else {
        0
    };

    Ok(CheckResult {
        word: folded,
        is_word,
        is_prefix,
        location,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (Board, Lexicon) {
        (
            Board::from_tiles(&["A", "B", "C", "D"]).unwrap(),
            Lexicon::from_words(["ab", "ad", "abc", "abd", "abdc", "abba"]),
        )
    }

    #[test]
    fn check_word_on_board() {
        let (board, lexicon) = scenario();
        let result = check_word("ABDC", &board, &lexicon, 2).unwrap();

        assert_eq!(result.word, "abdc");
        assert!(result.is_word);
        assert!(result.is_prefix);
        assert_eq!(result.location.path, vec![0, 1, 3, 2]);
        assert_eq!(result.points, 3);
    }

    #[test]
    fn check_word_off_board() {
        let (board, lexicon) = scenario();
        let result = check_word("abba", &board, &lexicon, 2).unwrap();

        assert!(result.is_word);
        assert!(!result.location.found());
        assert_eq!(result.points, 0);
    }

    #[test]
    fn check_prefix_only() {
        let (board, lexicon) = scenario();
        let result = check_word("a", &board, &lexicon, 1).unwrap();

        assert!(!result.is_word);
        assert!(result.is_prefix);
        assert!(result.location.found());
        assert_eq!(result.points, 0);
    }

    #[test]
    fn check_rejects_zero_minimum() {
        let (board, lexicon) = scenario();
        assert!(check_word("ab", &board, &lexicon, 0).is_err());
    }
}
