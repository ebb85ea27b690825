//! Boggle solving algorithms
//!
//! Word enumeration and single-word lookup are two visitors over the same
//! backtracking traversal; scoring is a pure function over word sets.

mod engine;
pub mod finder;
mod locator;
pub mod round;
pub mod scorer;
pub mod traversal;

pub use engine::Game;
pub use finder::{Pruning, WordFinder, find_all};
pub use locator::locate;
pub use round::{GuessOutcome, Round};
pub use scorer::{ScoreCard, score, score_card};
