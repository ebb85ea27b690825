//! Word list loading utilities
//!
//! Builds a [`Lexicon`] from a file, any buffered reader, or the embedded list.

use super::WORDS;
use crate::core::{GameError, Lexicon};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load a lexicon from a newline-delimited word file
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use boggle_solver::wordlists::loader::load_from_file;
///
/// let lexicon = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, GameError> {
    let path = path.as_ref();
    let unreadable =
        |e: io::Error| GameError::InvalidInput(format!("cannot read {}: {e}", path.display()));

    let file = File::open(path).map_err(unreadable)?;
    let words = words_from_reader(BufReader::new(file)).map_err(unreadable)?;

    tracing::info!(path = %path.display(), lines = words.len(), "word list read");
    Ok(Lexicon::from_words(words))
}

/// Read one word per line, skipping blank lines
///
/// # Errors
///
/// Returns any I/O error raised by the reader.
pub fn words_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            words.push(trimmed.to_string());
        }
    }
    Ok(words)
}

/// Lexicon built from the embedded dictionary
#[must_use]
pub fn embedded_lexicon() -> Lexicon {
    Lexicon::from_words(WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_skips_blank_lines() {
        let input = "crane\n\n  slate \r\nIRATE\n";
        let words = words_from_reader(input.as_bytes()).unwrap();
        assert_eq!(words, vec!["crane", "slate", "IRATE"]);
    }

    #[test]
    fn reader_empty() {
        let words = words_from_reader("".as_bytes()).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn missing_file_is_invalid_input() {
        let result = load_from_file("/no/such/dir/words.txt");
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn embedded_lexicon_matches_list() {
        let lexicon = embedded_lexicon();
        assert_eq!(lexicon.len(), WORDS.len());
        assert!(lexicon.contains("peace"));
        assert!(lexicon.has_word_with_prefix("pea"));
    }
}
