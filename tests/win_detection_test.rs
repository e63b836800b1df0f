//! Tests for winning-line detection against full board snapshots.

use std::collections::{BTreeMap, BTreeSet};
use strictly_tictactoe::{
    Grid, LineKind, Mark, Position, detect_winning_line, is_board_full, resolve_mark,
};

fn grid(s: &str) -> Grid {
    s.parse().expect("valid board")
}

fn line_map(cells: &[(usize, &[usize])]) -> BTreeMap<usize, BTreeSet<usize>> {
    cells
        .iter()
        .map(|(row, cols)| (*row, cols.iter().copied().collect()))
        .collect()
}

#[test]
fn test_empty_board_has_no_line() {
    let board = Grid::new();
    assert_eq!(detect_winning_line(&board), None);
    assert!(!is_board_full(&board));
}

#[test]
fn test_main_diagonal() {
    let board = grid("X__/_X_/__X");
    let line = detect_winning_line(&board).expect("main diagonal");
    assert_eq!(line.to_map(), line_map(&[(0, &[0]), (1, &[1]), (2, &[2])]));
    assert_eq!(resolve_mark(&board, &line), Some(Mark::X));
}

#[test]
fn test_anti_diagonal() {
    let board = grid("X_O/_O_/O_X");
    let line = detect_winning_line(&board).expect("anti-diagonal");
    assert_eq!(line.kind(), LineKind::AntiDiagonal);
    assert_eq!(line.to_map(), line_map(&[(0, &[2]), (1, &[1]), (2, &[0])]));
    assert_eq!(resolve_mark(&board, &line), Some(Mark::O));
}

#[test]
fn test_top_row() {
    let board = grid("OOO/_X_/X_X");
    let line = detect_winning_line(&board).expect("top row");
    assert_eq!(line.to_map(), line_map(&[(0, &[0, 1, 2])]));
    assert_eq!(resolve_mark(&board, &line), Some(Mark::O));
}

#[test]
fn test_first_column() {
    let board = grid("XOO/XO_/X_X");
    let line = detect_winning_line(&board).expect("column 0");
    assert_eq!(line.kind(), LineKind::Column(0));
    assert_eq!(line.to_map(), line_map(&[(0, &[0]), (1, &[0]), (2, &[0])]));
    assert_eq!(resolve_mark(&board, &line), Some(Mark::X));
}

#[test]
fn test_drawn_board() {
    let board = grid("XOX/XOO/OXX");
    assert_eq!(detect_winning_line(&board), None);
    assert!(is_board_full(&board));
}

#[test]
fn test_full_board_with_winner_is_still_full() {
    let board = grid("XXX/OOX/XOO");
    assert!(detect_winning_line(&board).is_some());
    assert!(is_board_full(&board));
}

#[test]
fn test_winning_cells_share_one_mark() {
    for board in ["XOO/XXO/X_X", "O_X/_OX/X_O", "_X_/OXO/_X_"] {
        let board = grid(board);
        let line = detect_winning_line(&board).expect("line");
        let mark = resolve_mark(&board, &line).expect("mark");
        for pos in line.cells() {
            assert_eq!(board.get(pos).and_then(|s| s.mark()), Some(mark), "{pos}");
        }
    }
}

#[test]
fn test_cells_listed_in_row_major_order() {
    let line = detect_winning_line(&grid("__O/_O_/O__")).expect("anti-diagonal");
    assert_eq!(
        line.cells(),
        vec![Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
    );
}

#[test]
fn test_main_diagonal_beats_anti_diagonal() {
    let board = grid("X_X/_X_/X_X");
    let line = detect_winning_line(&board).expect("diagonal");
    assert_eq!(line.kind(), LineKind::MainDiagonal);
    assert_eq!(resolve_mark(&board, &line), Some(Mark::X));
}
