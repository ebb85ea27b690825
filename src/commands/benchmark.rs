//! Benchmark command
//!
//! Solves a batch of random boards and reports timing and word statistics.

use crate::core::dice::random_board;
use crate::core::{Board, GameError, Lexicon, check_minimum_length};
use crate::solver::{WordFinder, score};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Width of a bucket in the words-per-board histogram
pub const BUCKET_WIDTH: usize = 25;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub size: usize,
    pub seed: u64,
    pub total_boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub average_score: f64,
    pub best_board: Option<(Board, usize)>,
    /// Bucket start -> number of boards
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Settings for a benchmark run
pub struct BenchmarkConfig {
    pub size: usize,
    pub count: usize,
    pub minimum_length: usize,
    /// Fixed seed for reproducible boards; random when absent
    pub seed: Option<u64>,
}

/// Solve `config.count` random boards
///
/// # Errors
///
/// Returns `GameError::InvalidInput` for a board size below 2 or a minimum
/// length below 1.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    lexicon: &Lexicon,
) -> Result<BenchmarkResult, GameError> {
    check_minimum_length(config.minimum_length)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let pb = ProgressBar::new(config.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut total_words = 0;
    let mut total_score = 0u64;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut best_board: Option<(Board, usize)> = None;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    let start = Instant::now();

    for idx in 0..config.count {
        let board = random_board(config.size, &mut rng)?;
        let words = WordFinder::new(&board, lexicon, config.minimum_length)?.find_all();
        let count = words.len();

        total_words += count;
        total_score += u64::from(score(&words, lexicon, config.minimum_length)?);
        min_words = min_words.min(count);
        max_words = max_words.max(count);
        *distribution.entry(count / BUCKET_WIDTH * BUCKET_WIDTH).or_insert(0) += 1;

        if best_board.as_ref().is_none_or(|(_, best)| count > *best) {
            best_board = Some((board, count));
        }

        if idx % 10 == 0 {
            pb.set_message(format!("Avg: {:.1} words", total_words as f64 / (idx + 1) as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_boards = config.count;
    let per_board = |value: f64| {
        if total_boards == 0 {
            0.0
        } else {
            value / total_boards as f64
        }
    };

    tracing::info!(
        boards = total_boards,
        seed,
        elapsed_ms = duration.as_millis() as u64,
        "benchmark finished"
    );

    Ok(BenchmarkResult {
        size: config.size,
        seed,
        total_boards,
        total_words,
        average_words: per_board(total_words as f64),
        min_words: if total_boards == 0 { 0 } else { min_words },
        max_words,
        average_score: per_board(total_score as f64),
        best_board,
        distribution,
        duration,
        boards_per_second: total_boards as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
