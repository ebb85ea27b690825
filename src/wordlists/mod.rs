//! Word lists for building a lexicon
//!
//! Provides an embedded dictionary compiled into the binary and loaders for
//! newline-delimited word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_and_trimmed() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim(), "Word '{word}' has surrounding whitespace");
            assert_eq!(word, word.to_lowercase(), "Word '{word}' is not lowercase");
        }
    }

    #[test]
    fn embedded_list_is_substantial() {
        assert!(WORDS_COUNT > 1000, "Expected a usable dictionary");
    }
}
