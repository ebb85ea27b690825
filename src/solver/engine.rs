//! Stateful game facade
//!
//! Pairs a board with an optional lexicon. The board always has a usable
//! default; every lexicon-backed query fails with `GameError::NotReady` until
//! a lexicon has been loaded.

use super::finder::WordFinder;
use super::locator::locate;
use super::scorer::score;
use crate::core::{Board, GameError, Lexicon, check_minimum_length};
use crate::wordlists::loader::load_from_file;
use std::collections::BTreeSet;
use std::path::Path;

/// Main Boggle game interface
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    lexicon: Option<Lexicon>,
}

impl Game {
    /// Game on the default board with no lexicon
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Game on the default board with a ready lexicon
    #[must_use]
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            board: Board::default(),
            lexicon: Some(lexicon),
        }
    }

    /// Load the lexicon from a newline-delimited word file
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the file cannot be read. The
    /// previous lexicon, if any, is kept.
    pub fn load_lexicon<P: AsRef<Path>>(&mut self, path: P) -> Result<(), GameError> {
        self.lexicon = Some(load_from_file(path)?);
        Ok(())
    }

    /// Load the lexicon from words already in memory
    pub fn load_lexicon_from_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lexicon = Some(Lexicon::from_words(words));
    }

    /// Replace the board with a flat row-major tile sequence
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` for an empty, non-square or too small
    /// sequence. The current board is kept on failure.
    pub fn set_board<S: AsRef<str>>(&mut self, tiles: &[S]) -> Result<(), GameError> {
        self.board = Board::from_tiles(tiles)?;
        Ok(())
    }

    pub fn replace_board(&mut self, board: Board) {
        self.board = board;
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Printable board grid
    #[must_use]
    pub fn board_text(&self) -> String {
        self.board.render()
    }

    /// The loaded lexicon
    ///
    /// # Errors
    /// Returns `GameError::NotReady` if no lexicon has been loaded.
    pub fn lexicon(&self) -> Result<&Lexicon, GameError> {
        self.lexicon.as_ref().ok_or(GameError::NotReady)
    }

    /// Every lexicon word of at least `minimum_length` characters on the board
    ///
    /// # Errors
    /// `InvalidInput` if `minimum_length < 1`, otherwise `NotReady` without a lexicon.
    pub fn all_scorable_words(&self, minimum_length: usize) -> Result<BTreeSet<String>, GameError> {
        check_minimum_length(minimum_length)?;
        let lexicon = self.lexicon()?;
        Ok(WordFinder::new(&self.board, lexicon, minimum_length)?.find_all())
    }

    /// Cumulative score of the scorable words in `words`
    ///
    /// # Errors
    /// `InvalidInput` if `minimum_length < 1`, otherwise `NotReady` without a lexicon.
    pub fn score_for_words<I, S>(&self, words: I, minimum_length: usize) -> Result<u32, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        check_minimum_length(minimum_length)?;
        score(words, self.lexicon()?, minimum_length)
    }

    /// Whether the lexicon holds `word`, ignoring case
    ///
    /// # Errors
    /// Returns `GameError::NotReady` without a lexicon.
    pub fn is_valid_word(&self, word: &str) -> Result<bool, GameError> {
        Ok(self.lexicon()?.contains(&word.to_lowercase()))
    }

    /// Whether any lexicon word starts with `prefix`, ignoring case
    ///
    /// # Errors
    /// Returns `GameError::NotReady` without a lexicon.
    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool, GameError> {
        Ok(self.lexicon()?.has_word_with_prefix(&prefix.to_lowercase()))
    }

    /// Path spelling `word` on the board, or empty; needs no lexicon
    #[must_use]
    pub fn locate(&self, word: &str) -> Vec<usize> {
        locate(&self.board, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn scenario() -> Game {
        let mut game = Game::new();
        game.set_board(&["A", "B", "C", "D"]).unwrap();
        game.load_lexicon_from_words(["ab", "ad", "abc", "abd", "abdc"]);
        game
    }

    #[test]
    fn queries_before_loading_are_not_ready() {
        let game = Game::new();
        assert_eq!(game.all_scorable_words(3), Err(GameError::NotReady));
        assert_eq!(game.score_for_words(["peace"], 3), Err(GameError::NotReady));
        assert_eq!(game.is_valid_word("peace"), Err(GameError::NotReady));
        assert_eq!(game.is_valid_prefix("pea"), Err(GameError::NotReady));
    }

    #[test]
    fn invalid_length_checked_before_readiness() {
        let game = Game::new();
        assert!(matches!(
            game.all_scorable_words(0),
            Err(GameError::InvalidInput(_))
        ));
        assert!(matches!(
            game.score_for_words(["a"], 0),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn default_board_always_available() {
        let game = Game::new();
        assert_eq!(game.board().size(), 4);
        assert!(game.board_text().starts_with("E E C A\n"));
        assert!(!game.locate("peace").is_empty());
    }

    #[test]
    fn scenario_end_to_end() {
        let game = scenario();
        let words = game.all_scorable_words(2).unwrap();
        assert_eq!(
            words.iter().map(String::as_str).collect::<Vec<_>>(),
            ["ab", "abc", "abd", "abdc", "ad"]
        );
        assert_eq!(game.score_for_words(&words, 2).unwrap(), 9);
        assert_eq!(game.locate("abdc"), vec![0, 1, 3, 2]);
        assert!(game.is_valid_prefix("ab").unwrap());
        assert!(!game.is_valid_prefix("z").unwrap());
    }

    #[test]
    fn validity_queries_ignore_case() {
        let game = scenario();
        assert!(game.is_valid_word("ABDC").unwrap());
        assert!(game.is_valid_prefix("AB").unwrap());
        assert!(!game.is_valid_word("abdcx").unwrap());
    }

    #[test]
    fn failed_set_board_keeps_previous() {
        let mut game = scenario();
        assert!(game.set_board(&["A", "B", "C"]).is_err());
        assert_eq!(game.board().size(), 2);
        assert_eq!(game.board().tile_at(0).text(), "A");
    }

    #[test]
    fn load_lexicon_from_file() {
        let path = std::env::temp_dir().join(format!("boggle-lexicon-{}.txt", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "Peace\nLEAP\n\nlane").unwrap();
        }

        let mut game = Game::new();
        game.load_lexicon(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(game.lexicon().unwrap().len(), 3);
        assert!(game.is_valid_word("peace").unwrap());
        let words = game.all_scorable_words(4).unwrap();
        assert!(words.contains("peace") && words.contains("leap") && words.contains("lane"));
    }

    #[test]
    fn unreadable_lexicon_is_invalid_input_and_keeps_state() {
        let mut game = scenario();
        let result = game.load_lexicon("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
        assert!(game.is_valid_word("abdc").unwrap());

        let mut fresh = Game::new();
        assert!(fresh.load_lexicon("/definitely/not/here/words.txt").is_err());
        assert_eq!(fresh.is_valid_word("abdc"), Err(GameError::NotReady));
    }
}
