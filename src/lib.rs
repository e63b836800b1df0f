//! Strictly Tic-Tac-Toe library - board rules and keyboard focus navigation
//!
//! A single-session, two-player 3x3 board. The rules and the navigator are
//! pure functions over a borrowed grid; the [`Game`] controller owns the
//! mutable state and calls into them.
//!
//! # Architecture
//!
//! - **Rules**: winning-line detection, winner resolution, full-board check
//! - **Focus**: arrow-key navigation that skips filled cells
//! - **Game**: controller that places marks, tracks focus and scores
//! - **TUI**: terminal front end built on ratatui
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Grid, LineKind, Mark, detect_winning_line, resolve_mark};
//!
//! let grid: Grid = "X__/_X_/__X".parse().unwrap();
//! let line = detect_winning_line(&grid).unwrap();
//! assert_eq!(line.kind(), LineKind::MainDiagonal);
//! assert_eq!(resolve_mark(&grid, &line), Some(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod focus;
mod game;
mod position;
mod report;
mod rules;
mod scores;
mod types;

pub mod tui;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{COLS, Grid, GridParseError, Mark, ROWS, Square};

// Crate-level exports - Rules
pub use rules::{LineKind, WinningLine, detect_winning_line, is_board_full, is_draw, resolve_mark};

// Crate-level exports - Focus navigation
pub use focus::{
    Direction, FocusHandles, first_focusable, next_down, next_focusable, next_left, next_right,
    next_up,
};

// Crate-level exports - Controller
pub use game::{Game, GameStatus, MoveError};
pub use scores::Scores;

// Crate-level exports - Configuration and reporting
pub use config::{ConfigError, GameConfig};
pub use report::BoardReport;
