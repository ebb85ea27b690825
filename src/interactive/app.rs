//! TUI application state and logic

use crate::commands::PlayConfig;
use crate::core::dice::random_board;
use crate::core::{Board, GameError, Lexicon};
use crate::solver::{GuessOutcome, Round};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub lexicon: &'a Lexicon,
    pub round: Round<'a>,
    pub config: PlayConfig,
    rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    /// Cells of the most recently accepted word
    pub highlight: Vec<usize>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Revealed,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub total_score: u32,
    pub best_score: u32,
    pub words_found: usize,
}

impl<'a> App<'a> {
    /// Start on `board`; later rounds roll boards from `seed`
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidInput` if the minimum length is below one.
    pub fn new(
        lexicon: &'a Lexicon,
        board: Board,
        config: PlayConfig,
        seed: u64,
    ) -> Result<Self, GameError> {
        let round = Round::new(board, lexicon, config.minimum_length)?;
        let mut app = Self {
            lexicon,
            round,
            config,
            rng: StdRng::seed_from_u64(seed),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            highlight: Vec::new(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            &format!(
                "Find words of {}+ letters. Tiles must touch, diagonals count.",
                config.minimum_length
            ),
            MessageStyle::Info,
        );
        app.announce_round();
        Ok(app)
    }

    fn announce_round(&mut self) {
        let count = self.round.solutions().len();
        self.add_message(
            &format!("{count} words are hiding on this board"),
            MessageStyle::Info,
        );
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if input.trim().is_empty() {
            return;
        }

        match self.round.guess(&input) {
            GuessOutcome::Accepted { word, points, path } => {
                self.highlight = path;
                let plural = if points == 1 { "" } else { "s" };
                self.add_message(
                    &format!("{} +{points} point{plural}", word.to_uppercase()),
                    MessageStyle::Success,
                );
                if self.round.missed().next().is_none() {
                    self.add_message("Every word found!", MessageStyle::Success);
                    self.reveal();
                }
            }
            GuessOutcome::AlreadyFound(word) => self.add_message(
                &format!("Already found {}", word.to_uppercase()),
                MessageStyle::Error,
            ),
            GuessOutcome::TooShort(word) => self.add_message(
                &format!(
                    "{} is too short (minimum {})",
                    word.to_uppercase(),
                    self.round.minimum_length()
                ),
                MessageStyle::Error,
            ),
            GuessOutcome::NotInLexicon(word) => self.add_message(
                &format!("{} is not in the dictionary", word.to_uppercase()),
                MessageStyle::Error,
            ),
            GuessOutcome::NotOnBoard(word) => self.add_message(
                &format!("{} is not on the board", word.to_uppercase()),
                MessageStyle::Error,
            ),
        }
    }

    /// End the round and show every word
    pub fn reveal(&mut self) {
        if self.input_mode == InputMode::Revealed {
            return;
        }

        let score = self.round.score();
        self.stats.rounds_played += 1;
        self.stats.total_score += score;
        self.stats.best_score = self.stats.best_score.max(score);
        self.stats.words_found += self.round.found().len();

        self.highlight.clear();
        self.input_buffer.clear();
        self.input_mode = InputMode::Revealed;
        self.add_message(
            &format!(
                "Round over: {score} of {} points",
                self.round.possible().total
            ),
            MessageStyle::Info,
        );
        self.add_message("Press 'n' for a new board or 'q' to quit.", MessageStyle::Info);
    }

    /// Roll a fresh board and start over
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidInput` if the configured board size is unusable.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        let board = random_board(self.config.size, &mut self.rng)?;
        self.round = Round::new(board, self.lexicon, self.config.minimum_length)?;
        self.highlight.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New board!", MessageStyle::Info);
        self.announce_round();
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Percent of the available points earned so far
    #[must_use]
    pub fn progress_percent(&self) -> u16 {
        let possible = self.round.possible().total;
        if possible == 0 {
            return 0;
        }
        let pct = (u64::from(self.round.score()) * 100 / u64::from(possible)).min(100);
        u16::try_from(pct).unwrap_or(100)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            match app.input_mode {
                InputMode::Revealed => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_round()?,
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.reveal(),
                    KeyCode::Enter => app.submit_guess(),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Char(c) if c.is_alphabetic() => {
                        app.input_buffer.push(c.to_ascii_lowercase());
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
