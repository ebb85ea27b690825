//! Boggle Solver - CLI
//!
//! Solve boards, trace words and play rounds in the terminal.

use anyhow::{Context, Result};
use boggle_solver::{
    commands::{
        BenchmarkConfig, PlayConfig, SolveConfig, check_word, locate_word, run_benchmark,
        run_simple, solve_board,
    },
    core::{Board, Lexicon, dice::random_board},
    output::{
        print_benchmark_result, print_check_result, print_locate_result, print_solve_result,
    },
    solver::Pruning,
    wordlists::loader::{embedded_lexicon, load_from_file},
};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Boggle solver and player with trie-pruned parallel search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Board tiles in row-major order, e.g. "ABCD" or "Qu,I,T,E"
    #[arg(short, long, global = true)]
    board: Option<String>,

    /// Side length of randomly rolled boards
    #[arg(long, global = true, default_value = "4")]
    size: usize,

    /// Seed for random boards
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Minimum word length
    #[arg(short = 'm', long, global = true, default_value = "3")]
    min_length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive play without TUI)
    Simple,

    /// Find and score every word on the board
    Solve {
        /// Show the path for every word
        #[arg(short, long)]
        verbose: bool,

        /// Explore every path instead of pruning by prefix
        #[arg(long)]
        no_prune: bool,
    },

    /// Trace a word on the board
    Locate {
        /// Word to trace
        word: String,
    },

    /// Check a word against the dictionary and the board
    Check {
        /// Word to check
        word: String,
    },

    /// Benchmark solving random boards
    Benchmark {
        /// Number of random boards to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Load the lexicon based on the -w flag
fn load_lexicon(wordlist: &str) -> Result<Lexicon> {
    match wordlist {
        "embedded" => Ok(embedded_lexicon()),
        path => load_from_file(path).with_context(|| format!("loading wordlist {path}")),
    }
}

/// Board from --board, a rolled one, or the default layout
///
/// Play modes always roll unless a board is given; the one-shot commands use
/// the default layout unless a seed or another size asks for a roll.
fn resolve_board(cli: &Cli, rng: &mut StdRng, always_roll: bool) -> Result<Board> {
    if let Some(text) = &cli.board {
        return Board::parse(text).with_context(|| format!("parsing board {text:?}"));
    }
    if always_roll || cli.seed.is_some() || cli.size != Board::default().size() {
        return Ok(random_board(cli.size, rng)?);
    }
    Ok(Board::default())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("boggle_solver=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let mut cli = Cli::parse();

    let lexicon = load_lexicon(&cli.wordlist)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let play = PlayConfig {
        size: cli.size,
        minimum_length: cli.min_length,
    };

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let board = resolve_board(&cli, &mut rng, true)?;
            run_play_command(&lexicon, board, play, rng.random())
        }
        Commands::Simple => {
            let board = resolve_board(&cli, &mut rng, true)?;
            run_simple(&lexicon, board, play, &mut rng)
        }
        Commands::Solve { verbose, no_prune } => {
            let board = resolve_board(&cli, &mut rng, false)?;
            let mut config = SolveConfig::new(cli.min_length);
            if no_prune {
                config.pruning = Pruning::None;
            }
            let result = solve_board(&config, board, &lexicon)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Locate { word } => {
            let board = resolve_board(&cli, &mut rng, false)?;
            print_locate_result(&locate_word(&board, &word), &board);
            Ok(())
        }
        Commands::Check { word } => {
            let board = resolve_board(&cli, &mut rng, false)?;
            let result = check_word(&word, &board, &lexicon, cli.min_length)?;
            print_check_result(&result, &board);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Solving {count} random {0}x{0} boards...", cli.size);
            let config = BenchmarkConfig {
                size: cli.size,
                count,
                minimum_length: cli.min_length,
                seed: Some(seed),
            };
            let result = run_benchmark(&config, &lexicon)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(lexicon: &Lexicon, board: Board, config: PlayConfig, seed: u64) -> Result<()> {
    use boggle_solver::interactive::{App, run_tui};

    let app = App::new(lexicon, board, config, seed)?;
    run_tui(app)
}
