//! Boggle Solver
//!
//! Finds every dictionary word on a Boggle board, scores word sets, and traces
//! individual words back to the tiles that spell them.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::core::{Board, Lexicon};
//! use boggle_solver::solver::{find_all, locate, score};
//!
//! let board = Board::from_tiles(&["A", "B", "C", "D"]).unwrap();
//! let lexicon = Lexicon::from_words(["ab", "ad", "abc", "abd", "abdc"]);
//!
//! let words = find_all(&board, &lexicon, 2).unwrap();
//! assert_eq!(words.len(), 5);
//! assert_eq!(score(&words, &lexicon, 2).unwrap(), 9);
//! assert_eq!(locate(&board, "abdc"), vec![0, 1, 3, 2]);
//! ```

// Core domain types
pub mod core;

// Search and scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
