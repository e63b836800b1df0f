//! Draw detection logic for tic-tac-toe.

use super::win::detect_winning_line;
use crate::types::Grid;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// Independent of whether a line has been completed.
#[instrument(skip(grid), fields(grid = %grid))]
pub fn is_board_full(grid: &Grid) -> bool {
    grid.squares().all(|(_, square)| !square.is_empty())
}

/// A full board with no winning line.
#[instrument(skip(grid), fields(grid = %grid))]
pub fn is_draw(grid: &Grid) -> bool {
    is_board_full(grid) && detect_winning_line(grid).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mark, Square};
    use crate::Position;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_board_full(&Grid::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut grid = Grid::new();
        grid.set(Position::new(1, 1), Square::Occupied(Mark::X));
        assert!(!is_board_full(&grid));
    }

    #[test]
    fn test_full_board() {
        let mut grid = Grid::new();
        for pos in Position::ALL {
            grid.set(pos, Square::Occupied(Mark::X));
        }
        assert!(is_board_full(&grid));
        assert!(!is_draw(&grid));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let grid: Grid = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_board_full(&grid));
        assert!(is_draw(&grid));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let grid: Grid = "XXX/OO_/___".parse().unwrap();
        assert!(!is_draw(&grid));
    }
}
