//! Command implementations

pub mod benchmark;
pub mod check;
pub mod locate;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use check::{CheckResult, check_word};
pub use locate::{LocateResult, locate_word};
pub use simple::{PlayConfig, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_board};
