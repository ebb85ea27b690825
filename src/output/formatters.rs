//! Formatting utilities for terminal output

use crate::core::Board;

/// Render the board grid with the cells on `path` bracketed
///
/// Rows end without trailing whitespace and are separated by newlines.
#[must_use]
pub fn highlight_board(board: &Board, path: &[usize]) -> String {
    let size = board.size();
    let mut rows = Vec::with_capacity(size);

    for row in 0..size {
        let mut line = String::new();
        for col in 0..size {
            let index = board.index(row, col);
            let text = board.tile_at(index).text();
            if path.contains(&index) {
                line.push_str(&format!("[{text:<2}]"));
            } else {
                line.push_str(&format!(" {text:<2} "));
            }
        }
        rows.push(line.trim_end().to_string());
    }

    rows.join("\n")
}

/// Format a path as tiles with their `(row, col)` positions
#[must_use]
pub fn format_path(board: &Board, path: &[usize]) -> String {
    path.iter()
        .map(|&index| {
            let (row, col) = board.position(index);
            format!("{}({row},{col})", board.tile_at(index).text())
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the available score has been earned
#[must_use]
pub fn score_bar(score: u32, possible: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(possible), width)
}
