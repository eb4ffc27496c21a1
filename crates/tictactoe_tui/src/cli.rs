//! Command-line interface for the terminal frontend.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with move history and replay
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a settings TOML file (defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File receiving log output while the board owns the terminal
    #[arg(long, default_value = "tictactoe_tui.log")]
    pub log_file: PathBuf,
}
