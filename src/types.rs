//! Core domain types for tic-tac-toe.

use crate::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of rows on the board.
pub const ROWS: usize = 3;

/// Number of columns on the board.
pub const COLS: usize = 3;

/// Mark placed by a player.
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
    Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (goes first unless configured otherwise).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Parses a mark from its board character (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '_',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 board of squares, indexed by row then column.
///
/// Only the controller mutates a grid; rules and navigation borrow it
/// read-only for a single call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    rows: [[Square; COLS]; ROWS],
}

impl Grid {
    /// Creates a new empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position, or `None` when off the board.
    pub fn get(&self, pos: Position) -> Option<Square> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    /// Sets the square at the given position.
    ///
    /// Returns `false` without touching the grid when `pos` is off the board.
    pub fn set(&mut self, pos: Position, square: Square) -> bool {
        match self.rows.get_mut(pos.row).and_then(|row| row.get_mut(pos.col)) {
            Some(slot) => {
                *slot = square;
                true
            }
            None => false,
        }
    }

    /// Checks if the square at `pos` is on the board and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Iterates every square with its position, row-major.
    pub fn squares(&self) -> impl Iterator<Item = (Position, Square)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, square)| (Position::new(row, col), *square))
        })
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                write!(f, "/")?;
            }
            for square in row {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GridParseError {
    /// The board did not have exactly [`ROWS`] rows.
    #[display("Expected {} rows, found {}", ROWS, _0)]
    RowCount(usize),

    /// A row did not have exactly [`COLS`] cells.
    #[display("Row {} has {} cells, expected {}", row, found, COLS)]
    RowLength {
        /// Row index.
        row: usize,
        /// Number of cells found.
        found: usize,
    },

    /// A cell character is neither a mark nor an empty marker.
    #[display("Unknown cell '{}' at row {}, column {}", found, row, col)]
    UnknownCell {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// Offending character.
        found: char,
    },
}

impl std::error::Error for GridParseError {}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses `X__/_X_/__X` style boards.
    ///
    /// Rows are separated by `/` or newlines. `X` and `O` are marks;
    /// `_`, `.` and `-` are empty squares.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .trim()
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != ROWS {
            return Err(GridParseError::RowCount(lines.len()));
        }

        let mut grid = Grid::new();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != COLS {
                return Err(GridParseError::RowLength { row, found });
            }
            for (col, c) in line.chars().enumerate() {
                let square = match c {
                    '_' | '.' | '-' => Square::Empty,
                    other => Square::Occupied(
                        Mark::from_char(other)
                            .ok_or(GridParseError::UnknownCell { row, col, found: other })?,
                    ),
                };
                grid.rows[row][col] = square;
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let grid: Grid = "XO_/.x-/o__".parse().unwrap();
        assert_eq!(
            grid.get(Position::new(0, 0)),
            Some(Square::Occupied(Mark::X))
        );
        assert_eq!(
            grid.get(Position::new(1, 1)),
            Some(Square::Occupied(Mark::X))
        );
        assert_eq!(
            grid.get(Position::new(2, 0)),
            Some(Square::Occupied(Mark::O))
        );
        assert_eq!(grid.to_string(), "XO_/_X_/O__");
    }

    #[test]
    fn test_parse_multiline() {
        let grid: Grid = "X__\n_O_\n__X\n".parse().unwrap();
        assert_eq!(grid.to_string(), "X__/_O_/__X");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("X__/___".parse::<Grid>(), Err(GridParseError::RowCount(2)));
        assert_eq!(
            "X_/___/___".parse::<Grid>(),
            Err(GridParseError::RowLength { row: 0, found: 2 })
        );
        assert_eq!(
            "___/_Z_/___".parse::<Grid>(),
            Err(GridParseError::UnknownCell { row: 1, col: 1, found: 'Z' })
        );
    }

    #[test]
    fn test_set_off_board_is_rejected() {
        let mut grid = Grid::new();
        assert!(!grid.set(Position::new(3, 0), Square::Occupied(Mark::X)));
        assert_eq!(grid, Grid::new());
        assert!(grid.set(Position::new(2, 2), Square::Occupied(Mark::O)));
        assert!(!grid.is_empty(Position::new(2, 2)));
    }

    #[test]
    fn test_squares_row_major() {
        let grid: Grid = "_O_/___/__X".parse().unwrap();
        let squares: Vec<(Position, Square)> = grid.squares().collect();
        assert_eq!(squares.len(), ROWS * COLS);
        assert_eq!(squares[1], (Position::new(0, 1), Square::Occupied(Mark::O)));
        assert_eq!(squares[8], (Position::new(2, 2), Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
