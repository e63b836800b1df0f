//! One-shot evaluation of a board, used by the `check` command.

use crate::rules::{LineKind, detect_winning_line, is_board_full, resolve_mark};
use crate::types::{Grid, Mark};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::instrument;

/// Everything the rules say about one grid snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardReport {
    /// Board in compact text form.
    pub board: String,
    /// Mark that completed a line.
    pub winner: Option<Mark>,
    /// Which line was completed.
    pub line: Option<LineKind>,
    /// Cells of the completed line, as row -> columns.
    pub cells: Option<BTreeMap<usize, BTreeSet<usize>>>,
    /// No empty squares remain.
    pub full: bool,
    /// Full with no winner.
    pub draw: bool,
}

impl BoardReport {
    /// Runs win and full-board detection on `grid`.
    #[instrument(skip(grid), fields(grid = %grid))]
    pub fn evaluate(grid: &Grid) -> Self {
        let line = detect_winning_line(grid);
        let winner = line.as_ref().and_then(|line| resolve_mark(grid, line));
        let full = is_board_full(grid);
        Self {
            board: grid.to_string(),
            winner,
            line: line.as_ref().map(|line| line.kind()),
            cells: line.as_ref().map(|line| line.to_map()),
            full,
            draw: full && line.is_none(),
        }
    }
}

impl std::fmt::Display for BoardReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board: {}", self.board)?;
        match (self.winner, self.line) {
            (Some(winner), Some(line)) => writeln!(f, "Winner: {} ({})", winner, line)?,
            _ if self.draw => writeln!(f, "Winner: none (draw)")?,
            _ => writeln!(f, "Winner: none")?,
        }
        write!(f, "Full: {}", self.full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_winner() {
        let grid: Grid = "OOO/_X_/X_X".parse().unwrap();
        let report = BoardReport::evaluate(&grid);
        assert_eq!(report.winner, Some(Mark::O));
        assert_eq!(report.line, Some(LineKind::Row(0)));
        assert!(!report.full);
        assert!(!report.draw);
        assert_eq!(
            report.to_string(),
            "Board: OOO/_X_/X_X\nWinner: O (row 0)\nFull: false"
        );
    }

    #[test]
    fn test_report_draw_json() {
        let grid: Grid = "XOX/OXX/OXO".parse().unwrap();
        let report = BoardReport::evaluate(&grid);
        assert!(report.draw);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["winner"], serde_json::Value::Null);
        assert_eq!(json["full"], serde_json::Value::Bool(true));
        assert_eq!(json["board"], "XOX/OXX/OXO");
    }
}
