//! Cell coordinates on the tic-tac-toe board.

use crate::types::{COLS, Grid, ROWS};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A (row, column) pair identifying one cell.
///
/// Ordering is row-major, so sorting positions lists cells top to bottom,
/// left to right.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Position {
    /// Row index (0 is the top row).
    pub row: usize,
    /// Column index (0 is the left column).
    pub col: usize,
}

impl Position {
    /// All 9 positions, row-major.
    pub const ALL: [Position; ROWS * COLS] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Checks that the position lies on the board.
    pub fn is_on_board(self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => "Off-board",
        }
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(grid))]
    pub fn valid_moves(grid: &Grid) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| grid.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mark, Square};

    #[test]
    fn test_valid_moves_skips_filled() {
        let mut grid = Grid::new();
        assert_eq!(Position::valid_moves(&grid), Position::ALL.to_vec());
        grid.set(Position::new(0, 0), Square::Occupied(Mark::X));
        let moves = Position::valid_moves(&grid);
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.first(), Some(&Position::new(0, 1)));
    }

    #[test]
    fn test_display_and_bounds() {
        assert_eq!(Position::new(1, 1).to_string(), "Center (1, 1)");
        assert!(!Position::new(0, 3).is_on_board());
        assert_eq!(Position::new(3, 3).label(), "Off-board");
    }
}
