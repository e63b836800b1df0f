//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a grid snapshot.
//! Rules never mutate the grid and keep no state between calls.

pub mod draw;
pub mod win;

pub use draw::{is_board_full, is_draw};
pub use win::{LineKind, WinningLine, detect_winning_line, resolve_mark};
