//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type words, get them checked and traced.

use crate::core::dice::random_board;
use crate::core::{Board, Lexicon};
use crate::output::formatters::{format_path, highlight_board};
use crate::solver::{GuessOutcome, Round};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Settings shared by the interactive modes
#[derive(Debug, Clone, Copy)]
pub struct PlayConfig {
    /// Side length of boards rolled for new rounds
    pub size: usize,
    pub minimum_length: usize,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails, or if a new board cannot be rolled
/// with the configured size.
pub fn run_simple<R: Rng>(
    lexicon: &Lexicon,
    board: Board,
    config: PlayConfig,
    rng: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Boggle - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Find words of {}+ letters by chaining touching tiles (diagonals count).",
        config.minimum_length
    );
    println!("Each tile may be used once per word.\n");
    println!("Commands: 'quit' to exit, 'new' for a new board, 'words' to reveal, 'board' to redraw\n");

    let mut round = Round::new(board, lexicon, config.minimum_length)?;
    print_board(&round, &[]);

    loop {
        let input = get_user_input("Word")?;

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                print_summary(&round);
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                print_summary(&round);
                round = Round::new(random_board(config.size, rng)?, lexicon, config.minimum_length)?;
                println!("\n🔄 New board!\n");
                print_board(&round, &[]);
            }
            "board" | "b" => print_board(&round, &[]),
            "words" | "reveal" => print_missed(&round),
            _ => report_guess(&mut round, &input),
        }
    }
}

fn report_guess(round: &mut Round<'_>, input: &str) {
    match round.guess(input) {
        GuessOutcome::Accepted { word, points, path } => {
            println!(
                "✅ {} +{} ({})",
                word.to_uppercase().green().bold(),
                points,
                format_path(round.board(), &path)
            );
            print_board(round, &path);
            println!(
                "Score: {}  |  Found {}/{}\n",
                round.score().to_string().bright_yellow().bold(),
                round.found().len(),
                round.solutions().len()
            );
        }
        GuessOutcome::AlreadyFound(word) => {
            println!("{}", format!("Already found {}", word.to_uppercase()).yellow());
        }
        GuessOutcome::TooShort(word) => println!(
            "{}",
            format!(
                "{} is too short (minimum {})",
                word.to_uppercase(),
                round.minimum_length()
            )
            .red()
        ),
        GuessOutcome::NotInLexicon(word) => {
            println!("{}", format!("{} is not in the dictionary", word.to_uppercase()).red());
        }
        GuessOutcome::NotOnBoard(word) => {
            println!("{}", format!("{} is not on the board", word.to_uppercase()).red());
        }
    }
}

fn print_board(round: &Round<'_>, path: &[usize]) {
    println!("{}", highlight_board(round.board(), path).bright_white().bold());
}

fn print_missed(round: &Round<'_>) {
    let missed: Vec<String> = round.missed().map(str::to_uppercase).collect();
    if missed.is_empty() {
        println!("{}", "You found every word!".green().bold());
        return;
    }
    println!("\nWords you missed ({}):", missed.len());
    for chunk in missed.chunks(8) {
        println!("  {}", chunk.join("  "));
    }
    println!();
}

fn print_summary(round: &Round<'_>) {
    let possible = round.possible();
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "  Found {} of {} words, {} of {} points",
        round.found().len().to_string().bright_cyan().bold(),
        round.solutions().len(),
        round.score().to_string().bright_yellow().bold(),
        possible.total
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
