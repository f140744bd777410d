use super::*;
use crate::types::Pos;

#[test]
fn new_board_is_empty() {
    let board = Board::new(4);
    assert_eq!(board.size(), 4);
    assert_eq!(board.queens_remaining(), 4);
    assert_eq!(board.queens_placed(), 0);
    assert!(!board.is_game_over());
    assert!(board.queens().is_empty());
}

#[test]
#[should_panic(expected = "board size must be positive")]
fn zero_size_board_panics() {
    Board::new(0);
}

#[test]
fn queen_attacks_row_column_and_diagonals() {
    let mut board = Board::new(4);
    board.place_queen(Pos::new(0, 0)).unwrap();

    // Occupied cell is never safe
    assert!(!board.is_safe(Pos::new(0, 0)));
    // Diagonal
    assert!(!board.is_safe(Pos::new(1, 1)));
    // Row
    assert!(!board.is_safe(Pos::new(0, 2)));
    // Column
    assert!(!board.is_safe(Pos::new(2, 0)));
    // Unrelated cell stays safe
    assert!(board.is_safe(Pos::new(2, 1)));
}

#[test]
fn anti_diagonal_is_attacked() {
    let mut board = Board::new(4);
    board.place_queen(Pos::new(0, 3)).unwrap();

    assert!(!board.is_safe(Pos::new(1, 2)));
    assert!(!board.is_safe(Pos::new(3, 0)));
    assert!(board.is_safe(Pos::new(2, 0)));
}

#[test]
fn place_queen_rejects_out_of_range() {
    let mut board = Board::new(4);
    assert_eq!(
        board.place_queen(Pos::new(4, 0)),
        Err(PlaceError::InvalidPosition)
    );
    assert_eq!(
        board.place_queen(Pos::new(0, 17)),
        Err(PlaceError::InvalidPosition)
    );
    assert_eq!(board.queens_remaining(), 4);
}

#[test]
fn place_queen_rejects_occupied_cell() {
    let mut board = Board::new(4);
    board.place_queen(Pos::new(1, 2)).unwrap();
    assert_eq!(
        board.place_queen(Pos::new(1, 2)),
        Err(PlaceError::CellOccupied)
    );
}

#[test]
fn place_queen_rejects_attacked_cell() {
    let mut board = Board::new(4);
    board.place_queen(Pos::new(0, 0)).unwrap();
    assert_eq!(
        board.place_queen(Pos::new(3, 3)),
        Err(PlaceError::UnsafePosition)
    );
}

#[test]
fn rejected_placement_leaves_board_untouched() {
    let mut board = Board::new(4);
    board.place_queen(Pos::new(0, 0)).unwrap();

    let before = board.clone();
    assert!(board.place_queen(Pos::new(0, 3)).is_err());
    assert!(board.place_queen(Pos::new(9, 9)).is_err());
    assert_eq!(board, before);
}

#[test]
fn queens_remaining_tracks_occupancy() {
    let mut board = Board::new(5);
    board.place_queen(Pos::new(0, 0)).unwrap();
    board.place_queen(Pos::new(1, 2)).unwrap();
    assert_eq!(board.queens_remaining(), 3);
    assert_eq!(board.queens_placed(), board.queens().len());

    board.unmake_move(Pos::new(1, 2));
    assert_eq!(board.queens_remaining(), 4);
    assert_eq!(board.queens_placed(), board.queens().len());

    board.make_move(Pos::new(1, 2));
    assert_eq!(board.queens_remaining(), 3);
}

#[test]
fn make_and_unmake_round_trip() {
    let mut board = Board::new(6);
    board.place_queen(Pos::new(2, 4)).unwrap();

    let before = board.clone();
    board.make_move(Pos::new(4, 1));
    assert_ne!(board, before);
    board.unmake_move(Pos::new(4, 1));
    assert_eq!(board, before);
}

#[test]
fn reset_clears_board() {
    let mut board = Board::new(4);
    board.place_queen(Pos::new(0, 1)).unwrap();
    board.reset();
    assert_eq!(board.queens_remaining(), 4);
    assert!(board.queens().is_empty());
}

#[test]
fn reset_to_changes_size() {
    let mut board = Board::new(4);
    board.place_queen(Pos::new(0, 1)).unwrap();
    board.reset_to(6);
    assert_eq!(board.size(), 6);
    assert_eq!(board.queens_remaining(), 6);
    assert!(board.queens().is_empty());
}

#[test]
fn queens_enumerate_in_row_major_order() {
    let mut board = Board::new(4);
    board.place_queen(Pos::new(2, 0)).unwrap();
    board.place_queen(Pos::new(0, 1)).unwrap();
    assert_eq!(board.queens(), vec![Pos::new(0, 1), Pos::new(2, 0)]);
}

#[test]
fn display_renders_grid() {
    let mut board = Board::new(3);
    board.place_queen(Pos::new(1, 1)).unwrap();
    assert_eq!(board.to_string(), ". . .\n. Q .\n. . .\n");
}

#[test]
fn place_error_messages() {
    assert_eq!(
        PlaceError::UnsafePosition.to_string(),
        "position is under attack"
    );
    assert_eq!(
        PlaceError::InvalidPosition.to_string(),
        "position is outside the board"
    );
}
