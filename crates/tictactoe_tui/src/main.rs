//! Terminal frontend for tic-tac-toe with move history and replay.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::{App, Control};
use clap::Parser;
use cli::Cli;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tictactoe_core::Settings;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    init_logging(&cli.log_file, &settings)?;
    info!(config = ?cli.config, "Starting tic-tac-toe TUI");

    run_tui(&settings)
}

/// Logs to a file so output does not interfere with the board.
fn init_logging(path: &Path, settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

/// Sets up the terminal, runs the game and restores the terminal.
fn run_tui(settings: &Settings) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*settings.order());
    let res = run_game(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().history().len() - 1, "Exiting tic-tac-toe TUI");

    res
}

/// Redraw after every input; block until the next key.
#[instrument(skip_all)]
fn run_game(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let view = app.view();
        terminal.draw(|frame| ui::draw(frame, &view, app.cursor()))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
