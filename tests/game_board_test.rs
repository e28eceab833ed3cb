//! Tests for board outcomes: wins on every line kind, ties, and gravity.

use drop_token::{Board, BoardOutcome, Cell};

/// Plays `(column, slot)` drops in order onto a fresh 4x4 board.
fn board_from_drops(drops: &[(usize, usize)]) -> Board {
    let mut board = Board::new(4);
    for (column, slot) in drops {
        board.drop_token(*column, *slot).expect("drop failed");
    }
    board
}

/// Stacks `slots` bottom-up into one column.
fn fill_column(board: &mut Board, column: usize, slots: &[usize]) {
    for slot in slots {
        board.drop_token(column, *slot).expect("drop failed");
    }
}

#[test]
fn test_horizontal_win_on_bottom_row() {
    let board = board_from_drops(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 1), (3, 0)]);
    assert_eq!(board.outcome(), BoardOutcome::Done(Some(0)));
}

#[test]
fn test_horizontal_win_above_bottom_row() {
    // Slot 1 owns all of row 1; row 0 below it is mixed.
    let board = board_from_drops(&[
        (0, 0),
        (0, 1),
        (1, 0),
        (1, 1),
        (2, 0),
        (2, 1),
        (3, 1),
        (3, 1),
    ]);
    assert_eq!(board.outcome(), BoardOutcome::Done(Some(1)));
}

#[test]
fn test_vertical_win() {
    let mut board = Board::new(4);
    fill_column(&mut board, 0, &[0, 0, 0, 1]);
    fill_column(&mut board, 1, &[1, 1, 1, 1]);
    fill_column(&mut board, 2, &[0, 1, 0]);
    fill_column(&mut board, 3, &[0, 0, 1]);
    assert_eq!(board.outcome(), BoardOutcome::Done(Some(1)));
}

#[test]
fn test_main_diagonal_win() {
    // Slot 1 holds (0,0), (1,1), (2,2), (3,3).
    let mut board = Board::new(4);
    fill_column(&mut board, 0, &[1, 0, 0, 1]);
    fill_column(&mut board, 1, &[1, 1, 0, 1]);
    fill_column(&mut board, 2, &[0, 1, 1]);
    fill_column(&mut board, 3, &[0, 0, 1, 1]);
    assert_eq!(board.outcome(), BoardOutcome::Done(Some(1)));
}

#[test]
fn test_anti_diagonal_win() {
    // Slot 0 holds (0,3), (1,2), (2,1), (3,0).
    let mut board = Board::new(4);
    fill_column(&mut board, 0, &[1, 0, 0, 0]);
    fill_column(&mut board, 1, &[1, 1, 0, 1]);
    fill_column(&mut board, 2, &[0, 0, 1]);
    fill_column(&mut board, 3, &[0, 0, 1, 0]);
    assert_eq!(board.outcome(), BoardOutcome::Done(Some(0)));
}

#[test]
fn test_full_board_tie() {
    let mut board = Board::new(4);
    fill_column(&mut board, 0, &[1, 0, 0, 1]);
    fill_column(&mut board, 1, &[1, 1, 0, 1]);
    fill_column(&mut board, 2, &[0, 0, 1, 0]);
    fill_column(&mut board, 3, &[0, 0, 1, 0]);
    assert!(board.is_full());
    assert_eq!(board.outcome(), BoardOutcome::Done(None));
}

#[test]
fn test_partial_board_in_progress() {
    // Same shape as the tie but with one cell still open in column 1.
    let mut board = Board::new(4);
    fill_column(&mut board, 0, &[1, 0, 0, 1]);
    fill_column(&mut board, 1, &[1, 1, 0]);
    fill_column(&mut board, 2, &[0, 0, 1, 0]);
    fill_column(&mut board, 3, &[0, 0, 1, 0]);
    assert!(!board.is_full());
    assert_eq!(board.outcome(), BoardOutcome::InProgress);
}

#[test]
fn test_no_floating_tokens_after_scattered_drops() {
    let board = board_from_drops(&[(0, 0), (2, 1), (2, 0), (3, 1), (0, 1), (2, 1)]);
    for column in 0..4 {
        let mut seen_empty = false;
        for row in 0..4 {
            match board.get(row, column).expect("cell out of bounds") {
                Cell::Empty => seen_empty = true,
                Cell::Token(_) => {
                    assert!(!seen_empty, "floating token at row {row}, column {column}");
                }
            }
        }
    }
    assert_eq!(board.get(0, 2), Some(Cell::Token(1)));
    assert_eq!(board.get(1, 2), Some(Cell::Token(0)));
    assert_eq!(board.get(2, 2), Some(Cell::Token(1)));
}
