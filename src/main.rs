//! Strictly Tic-Tac-Toe - Unified CLI
//!
//! Play in the terminal or evaluate a board from the command line.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_tictactoe::{BoardReport, GameConfig, Grid, Mark};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, first } => run_play(config, first),
        Command::Check { board, json } => run_check(&board, json),
    }
}

/// Run the terminal UI
fn run_play(config_path: PathBuf, first: Option<Mark>) -> Result<()> {
    let mut config = GameConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    if let Some(mark) = first {
        config = config.with_first_mark(mark);
    }

    // Log to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| {
            format!("Failed to create log file {}", config.log_file().display())
        })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(config = %config_path.display(), "Starting Strictly Tic-Tac-Toe");
    strictly_tictactoe::tui::run(&config)
}

/// Evaluate a board and print the result
fn run_check(board: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(board, json, "Checking board");
    let grid: Grid = board.parse().context("Invalid board")?;
    let report = BoardReport::evaluate(&grid);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
