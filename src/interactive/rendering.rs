//! TUI rendering with ratatui
//!
//! Board, word list and score panels for the Boggle interface.

use super::app::{App, InputMode, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and words
            Constraint::Percentage(45), // Score and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎲 BOGGLE - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let size = u16::try_from(app.round.board().size()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(size.saturating_mul(2).saturating_add(2)), // Board
            Constraint::Min(3),                                          // Words
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_words(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.round.board();
    let mut lines = Vec::with_capacity(board.size() * 2);

    for row in 0..board.size() {
        let mut spans = Vec::with_capacity(board.size());
        for col in 0..board.size() {
            let index = board.index(row, col);
            let text = format!(" {:^3} ", board.tile_at(index).text());
            let style = if let Some(step) = app.highlight.iter().position(|&c| c == index) {
                // First tile of the word stands out from the rest
                let color = if step == 0 { Color::Green } else { Color::Yellow };
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let (title, words, color): (String, Vec<String>, Color) = match app.input_mode {
        InputMode::Guessing => (
            format!(" Found ({}) ", app.round.found().len()),
            app.round
                .found()
                .iter()
                .rev()
                .map(|w| w.to_uppercase())
                .collect(),
            Color::Green,
        ),
        InputMode::Revealed => {
            let missed: Vec<String> = app.round.missed().map(str::to_uppercase).collect();
            (format!(" Missed ({}) ", missed.len()), missed, Color::Yellow)
        }
    };

    let paragraph = Paragraph::new(words.join("  "))
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score gauge
            Constraint::Length(6), // Breakdown
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_breakdown(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let possible = app.round.possible().total;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(app.progress_percent())
        .label(format!(
            "{}/{possible} points | {}/{} words",
            app.round.score(),
            app.round.found().len(),
            app.round.solutions().len()
        ));

    f.render_widget(gauge, area);
}

fn render_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let card = app.round.possible();
    let lines: Vec<Line> = card
        .by_length
        .iter()
        .map(|(length, (count, points))| {
            let found = app
                .round
                .found()
                .iter()
                .filter(|w| w.chars().count() == *length)
                .count();
            Line::from(vec![
                Span::styled(
                    format!("{length:>2} letters "),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!("{found:>3}/{count:<3} words  {points:>4} pts")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" By Length ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Revealed => (
            " Round over | Press 'n' for a new board or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter a word | TAB to reveal all words ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Playing",
        InputMode::Revealed => "Mode: Revealed",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Best: {}",
        app.stats.rounds_played, app.stats.best_score
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let average = if app.stats.rounds_played > 0 {
        f64::from(app.stats.total_score) / app.stats.rounds_played as f64
    } else {
        0.0
    };
    let average = Paragraph::new(format!("Avg score: {average:.1}")).alignment(Alignment::Center);
    f.render_widget(average, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit | Enter: Submit | TAB: Reveal",
        InputMode::Revealed => "q: Quit | n: New Board",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
