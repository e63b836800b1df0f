//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use strictly_tictactoe::Mark;

/// Strictly Tic-Tac-Toe - keyboard-driven two-player board
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game in the terminal
    Play {
        /// Path to game config file
        #[arg(short, long, default_value = "strictly_tictactoe.toml")]
        config: std::path::PathBuf,

        /// Mark that moves first (overrides config)
        #[arg(long, value_parser = parse_mark)]
        first: Option<Mark>,
    },

    /// Evaluate a board such as `X__/_X_/__X`
    Check {
        /// Board rows separated by `/`; `X`, `O`, or `_` for empty
        board: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_mark(s: &str) -> Result<Mark, String> {
    let mut chars = s.trim().chars();
    match (chars.next().and_then(Mark::from_char), chars.next()) {
        (Some(mark), None) => Ok(mark),
        _ => Err(format!("expected X or O, got '{}'", s)),
    }
}
