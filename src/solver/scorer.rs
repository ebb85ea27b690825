//! Length-based word scoring
//!
//! A scorable word earns one point for reaching the minimum length and one
//! more for each character beyond it.

use crate::core::{GameError, Lexicon, check_minimum_length};
use std::collections::BTreeMap;

/// Score breakdown for a set of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreCard {
    /// Sum of all word scores
    pub total: u32,
    /// Number of words that earned points
    pub scorable: usize,
    /// Word length -> (word count, points)
    pub by_length: BTreeMap<usize, (usize, u32)>,
}

/// Points for a word of `length` characters, ignoring lexicon membership
#[inline]
#[must_use]
pub const fn points_for_length(length: usize, minimum_length: usize) -> u32 {
    if length >= minimum_length {
        (1 + length - minimum_length) as u32
    } else {
        0
    }
}

/// Total score of the scorable words in `words`
///
/// A word scores if it has at least `minimum_length` characters and the
/// lexicon contains it exactly as given.
///
/// # Errors
/// Returns `GameError::InvalidInput` if `minimum_length < 1`.
///
/// # Examples
/// ```
/// use boggle_solver::core::Lexicon;
/// use boggle_solver::solver::score;
///
/// let lexicon = Lexicon::from_words(["ab", "ad", "abc", "abd", "abdc"]);
/// let total = score(["ab", "abc", "abd", "abdc", "ad"], &lexicon, 2).unwrap();
/// assert_eq!(total, 9);
/// ```
pub fn score<I, S>(words: I, lexicon: &Lexicon, minimum_length: usize) -> Result<u32, GameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(score_card(words, lexicon, minimum_length)?.total)
}

/// Score `words` and break the result down by word length
///
/// # Errors
/// Returns `GameError::InvalidInput` if `minimum_length < 1`.
pub fn score_card<I, S>(
    words: I,
    lexicon: &Lexicon,
    minimum_length: usize,
) -> Result<ScoreCard, GameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    check_minimum_length(minimum_length)?;

    let mut card = ScoreCard::default();
    for word in words {
        let word = word.as_ref();
        let length = word.chars().count();
        if length < minimum_length || !lexicon.contains(word) {
            continue;
        }

        let points = points_for_length(length, minimum_length);
        card.total += points;
        card.scorable += 1;
        let entry = card.by_length.entry(length).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += points;
    }
    Ok(card)
}
