//! Win detection logic for tic-tac-toe.

use crate::types::{COLS, Grid, Mark, ROWS, Square};
use crate::Position;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, instrument, trace};

/// Which line of the board a win was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Row by index, left to right.
    Row(usize),
    /// Column by index, top to bottom.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl LineKind {
    /// Every line in detection priority order.
    pub fn all() -> impl Iterator<Item = LineKind> {
        (0..ROWS)
            .map(LineKind::Row)
            .chain((0..COLS).map(LineKind::Column))
            .chain([LineKind::MainDiagonal, LineKind::AntiDiagonal])
    }

    /// Cells along the line, in ascending row then column order.
    pub fn cells(self) -> Vec<Position> {
        match self {
            LineKind::Row(row) => (0..COLS).map(|col| Position::new(row, col)).collect(),
            LineKind::Column(col) => (0..ROWS).map(|row| Position::new(row, col)).collect(),
            LineKind::MainDiagonal => (0..ROWS).map(|row| Position::new(row, row)).collect(),
            LineKind::AntiDiagonal => (0..ROWS)
                .map(|row| Position::new(row, COLS - 1 - row))
                .collect(),
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Row(row) => write!(f, "row {}", row),
            LineKind::Column(col) => write!(f, "column {}", col),
            LineKind::MainDiagonal => write!(f, "main diagonal"),
            LineKind::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// The cells of a detected winning line.
///
/// Built fresh on every detection call; never merged with an earlier result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    kind: LineKind,
}

impl WinningLine {
    /// Wraps a line kind.
    pub fn new(kind: LineKind) -> Self {
        Self { kind }
    }

    /// Returns which line won.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Cells of the line in ascending row then column order.
    pub fn cells(&self) -> Vec<Position> {
        self.kind.cells()
    }

    /// Checks if `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells().contains(&pos)
    }

    /// Sparse row -> columns view of the line.
    pub fn to_map(&self) -> BTreeMap<usize, BTreeSet<usize>> {
        let mut map: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
        for pos in self.cells() {
            map.entry(pos.row).or_default().insert(pos.col);
        }
        map
    }
}

/// Returns the shared mark when every cell on the line holds it.
fn line_mark(grid: &Grid, cells: &[Position]) -> Option<Mark> {
    let mark = grid.get(*cells.first()?)?.mark()?;
    cells
        .windows(2)
        .all(|pair| grid.get(pair[0]) == grid.get(pair[1]))
        .then_some(mark)
}

/// Checks if any main-diagonal square holds a mark.
fn diagonal_has_mark(grid: &Grid) -> bool {
    LineKind::MainDiagonal
        .cells()
        .into_iter()
        .any(|pos| !grid.is_empty(pos))
}

/// Finds the first complete line of identical marks.
///
/// Nothing is scanned while every main-diagonal square is empty. Every row
/// and column of a square board crosses the main diagonal, so the gate only
/// skips boards that cannot hold a line.
///
/// Rows are checked before columns, columns before the main diagonal, and
/// the main diagonal before the anti-diagonal. Within rows and columns the
/// lowest index wins. Only the first match is reported.
#[instrument(skip(grid), fields(grid = %grid))]
pub fn detect_winning_line(grid: &Grid) -> Option<WinningLine> {
    if !diagonal_has_mark(grid) {
        trace!("Main diagonal empty, skipping scan");
        return None;
    }

    let line = LineKind::all()
        .find(|kind| line_mark(grid, &kind.cells()).is_some())
        .map(WinningLine::new);

    if let Some(line) = &line {
        debug!(kind = %line.kind(), "Winning line found");
    }
    line
}

/// Returns the mark on the first cell of the line.
///
/// `None` if that cell is empty, which only happens when the line was
/// detected against a different grid.
#[instrument(skip(grid))]
pub fn resolve_mark(grid: &Grid, line: &WinningLine) -> Option<Mark> {
    let first = *line.cells().first()?;
    grid.get(first).and_then(Square::mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect_winning_line(&Grid::new()), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(detect_winning_line(&grid("XX_/_O_/___")), None);
    }

    #[test]
    fn test_gate_never_hides_a_line() {
        for kind in LineKind::all() {
            let mut board = Grid::new();
            for pos in kind.cells() {
                board.set(pos, Square::Occupied(Mark::O));
            }
            assert_eq!(detect_winning_line(&board), Some(WinningLine::new(kind)));
            assert_eq!(resolve_mark(&board, &WinningLine::new(kind)), Some(Mark::O));
        }
    }

    #[test]
    fn test_gate_skips_empty_diagonal() {
        assert_eq!(detect_winning_line(&grid("_XO/O_X/XO_")), None);
    }

    #[test]
    fn test_row_beats_column() {
        // Row 0 and column 0 are both complete.
        let board = grid("XXX/XO_/XOO");
        let line = detect_winning_line(&board).unwrap();
        assert_eq!(line.kind(), LineKind::Row(0));
    }

    #[test]
    fn test_column_beats_diagonal() {
        // Column 0 and the main diagonal are both complete.
        let board = grid("XOO/XXO/X_X");
        let line = detect_winning_line(&board).unwrap();
        assert_eq!(line.kind(), LineKind::Column(0));
    }

    #[test]
    fn test_lowest_row_first() {
        let board = grid("XXX/OOO/X_O");
        assert_eq!(
            detect_winning_line(&board).unwrap().kind(),
            LineKind::Row(0)
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(detect_winning_line(&grid("XOX/_X_/O_O")), None);
    }

    #[test]
    fn test_line_map() {
        let line = WinningLine::new(LineKind::AntiDiagonal);
        let map = line.to_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map[&0], BTreeSet::from([2]));
        assert_eq!(map[&1], BTreeSet::from([1]));
        assert_eq!(map[&2], BTreeSet::from([0]));
        assert!(line.contains(Position::new(1, 1)));
        assert!(!line.contains(Position::new(0, 0)));
    }

    #[test]
    fn test_resolve_mark_on_stale_grid() {
        let line = WinningLine::new(LineKind::Row(2));
        assert_eq!(resolve_mark(&Grid::new(), &line), None);
    }
}
