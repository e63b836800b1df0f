//! Arrow-key focus navigation that skips filled cells.
//!
//! Each direction scans along the current row (or column) first, then wraps
//! to the neighbouring rows (or columns) until the board edge:
//!
//! | Direction | Inner scan | Then advances to | Restarting at |
//! |-----------|------------|------------------|---------------|
//! | Left      | columns leftward | previous row | last column |
//! | Right     | columns rightward | next row | column 0 |
//! | Up        | rows upward | previous column | last row |
//! | Down      | rows downward | next column | row 0 |
//!
//! A cell is a valid stop only if it is empty and has a registered handle.
//! Filled cells are skipped. A cell with no registered handle ends the whole
//! search with no result.

use super::FocusHandles;
use crate::types::{COLS, Grid, ROWS, Square};
use crate::Position;
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use tracing::{debug, instrument};

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward column 0, wrapping to earlier rows.
    Left,
    /// Toward the last column, wrapping to later rows.
    Right,
    /// Toward row 0, wrapping to earlier columns.
    Up,
    /// Toward the last row, wrapping to later columns.
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// Visits one cell: `Break(Some)` on a stop, `Break(None)` on an
/// unregistered cell, `Continue` past a filled cell.
fn visit<'h, H>(
    grid: &Grid,
    handles: &'h FocusHandles<H>,
    pos: Position,
) -> ControlFlow<Option<&'h H>> {
    let Some(handle) = handles.get(pos) else {
        debug!(%pos, "Unregistered cell, ending search");
        return ControlFlow::Break(None);
    };
    match grid.get(pos) {
        Some(Square::Empty) => ControlFlow::Break(Some(handle)),
        _ => ControlFlow::Continue(()),
    }
}

/// Next empty cell to the left, wrapping to the end of earlier rows.
pub fn next_left<'h, H>(
    grid: &Grid,
    handles: &'h FocusHandles<H>,
    from: Position,
) -> Option<&'h H> {
    for row in (0..=from.row).rev() {
        let end = if row == from.row { from.col } else { COLS };
        for col in (0..end).rev() {
            if let ControlFlow::Break(found) = visit(grid, handles, Position::new(row, col)) {
                return found;
            }
        }
    }
    None
}

/// Next empty cell to the right, wrapping to the start of later rows.
pub fn next_right<'h, H>(
    grid: &Grid,
    handles: &'h FocusHandles<H>,
    from: Position,
) -> Option<&'h H> {
    for row in from.row..ROWS {
        let start = if row == from.row {
            from.col.saturating_add(1)
        } else {
            0
        };
        for col in start..COLS {
            if let ControlFlow::Break(found) = visit(grid, handles, Position::new(row, col)) {
                return found;
            }
        }
    }
    None
}

/// Next empty cell above, wrapping to the bottom of earlier columns.
pub fn next_up<'h, H>(
    grid: &Grid,
    handles: &'h FocusHandles<H>,
    from: Position,
) -> Option<&'h H> {
    for col in (0..=from.col).rev() {
        let end = if col == from.col { from.row } else { ROWS };
        for row in (0..end).rev() {
            if let ControlFlow::Break(found) = visit(grid, handles, Position::new(row, col)) {
                return found;
            }
        }
    }
    None
}

/// Next empty cell below, wrapping to the top of later columns.
pub fn next_down<'h, H>(
    grid: &Grid,
    handles: &'h FocusHandles<H>,
    from: Position,
) -> Option<&'h H> {
    for col in from.col..COLS {
        let start = if col == from.col {
            from.row.saturating_add(1)
        } else {
            0
        };
        for row in start..ROWS {
            if let ControlFlow::Break(found) = visit(grid, handles, Position::new(row, col)) {
                return found;
            }
        }
    }
    None
}

/// Handle of the next focusable cell from `from` in `direction`.
#[instrument(skip(grid, handles), fields(grid = %grid))]
pub fn next_focusable<'h, H>(
    grid: &Grid,
    handles: &'h FocusHandles<H>,
    from: Position,
    direction: Direction,
) -> Option<&'h H> {
    match direction {
        Direction::Left => next_left(grid, handles, from),
        Direction::Right => next_right(grid, handles, from),
        Direction::Up => next_up(grid, handles, from),
        Direction::Down => next_down(grid, handles, from),
    }
}

/// Handle of the first empty, registered cell, row-major.
///
/// Used when no cell has focus yet.
#[instrument(skip(grid, handles), fields(grid = %grid))]
pub fn first_focusable<'h, H>(grid: &Grid, handles: &'h FocusHandles<H>) -> Option<&'h H> {
    Position::valid_moves(grid)
        .into_iter()
        .find_map(|pos| handles.get(pos))
}
