//! Display functions for command results

use super::formatters::{create_progress_bar, format_path, highlight_board};
use crate::commands::benchmark::BUCKET_WIDTH;
use crate::commands::{BenchmarkResult, CheckResult, LocateResult, SolveResult};
use crate::core::Board;
use colored::Colorize;

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving {}x{} board (words of {}+ letters)",
        result.board.size(),
        result.board.size(),
        result.minimum_length
    );
    println!("{}", "─".repeat(60).cyan());
    println!("\n{}\n", highlight_board(&result.board, &[]).bright_white().bold());

    if result.words.is_empty() {
        println!("{}", "No words found".yellow());
        return;
    }

    if verbose {
        for (word, path) in &result.words {
            println!(
                "  {:<16} {}",
                word.to_uppercase().green(),
                format_path(&result.board, path).bright_black()
            );
        }
    } else {
        let words: Vec<String> = result.words.keys().map(|w| w.to_uppercase()).collect();
        for chunk in words.chunks(8) {
            println!("  {}", chunk.join("  "));
        }
    }

    println!("\n📊 {}", "Score card:".bright_cyan().bold());
    for (length, (count, points)) in &result.card.by_length {
        println!("   {length:>2} letters: {count:4} words  {points:5} pts");
    }
    println!(
        "   {}",
        format!(
            "Total: {} words, {} points",
            result.card.scorable, result.card.total
        )
        .bright_yellow()
        .bold()
    );

    let longest = result.longest(5);
    println!(
        "   Longest:     {}",
        longest
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("   Time taken:  {:.2}ms", result.duration.as_secs_f64() * 1000.0);
}

/// Print where a word sits on the board
pub fn print_locate_result(result: &LocateResult, board: &Board) {
    if result.found() {
        println!(
            "\n{} {}\n",
            result.word.to_uppercase().green().bold(),
            format_path(board, &result.path)
        );
        println!("{}", highlight_board(board, &result.path));
    } else {
        println!(
            "\n{}",
            format!("{} is not on the board", result.word.to_uppercase()).red()
        );
    }
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult, board: &Board) {
    let mark = |ok: bool| if ok { "yes".green() } else { "no".red() };

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD CHECK:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("   In lexicon:   {}", mark(result.is_word));
    println!("   Valid prefix: {}", mark(result.is_prefix));
    println!("   On board:     {}", mark(result.location.found()));
    if result.location.found() {
        println!("   Path:         {}", format_path(board, &result.location.path));
    }
    println!(
        "   Points:       {}",
        result.points.to_string().bright_yellow()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Boards solved:    {} ({}x{}, seed {})",
        result.total_boards, result.size, result.size, result.seed
    );
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words)
            .bright_yellow()
            .bold()
    );
    println!("   Average score:    {:.2}", result.average_score);
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_words).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.total_boards == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&bucket, &count) in &result.distribution {
        let pct = (count as f64 / result.total_boards as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {:>4}-{:<4} {} {count:4} ({pct:5.1}%)",
            bucket,
            bucket + BUCKET_WIDTH - 1,
            bar.green()
        );
    }

    if let Some((board, words)) = &result.best_board {
        println!("\n🏆 {} ({words} words)", "Richest board:".bright_cyan().bold());
        println!("{}", highlight_board(board, &[]));
    }
}
