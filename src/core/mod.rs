//! Core domain types for Boggle
//!
//! The board, the lexicon and the error kinds every query shares. Both the
//! board and the lexicon are immutable once built and safe to share across
//! threads.

mod board;
pub mod dice;
mod error;
mod lexicon;

pub use board::{Board, DEFAULT_TILES, MOORE_OFFSETS, Tile};
pub use error::{GameError, check_minimum_length};
pub use lexicon::{Lexicon, NodeId};
