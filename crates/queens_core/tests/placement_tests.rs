//! Integration tests for the placement surface
//!
//! Walks complete games through the public API the way a frontend would:
//! alternating placements, rejection handling, and end-of-game detection.

use queens_core::{
    evaluate, safe_positions, Board, Heuristic, PlaceError, Pos, SOLVED_SCORE,
};

#[test]
fn full_4x4_solution_walk() {
    let mut board = Board::new(4);
    let solution = [
        Pos::new(0, 1),
        Pos::new(1, 3),
        Pos::new(2, 0),
        Pos::new(3, 2),
    ];

    for (i, &at) in solution.iter().enumerate() {
        assert!(!board.is_game_over());
        board.place_queen(at).unwrap();
        assert_eq!(board.queens_placed(), i + 1);
    }

    assert!(board.is_game_over());
    assert_eq!(board.queens_remaining(), 0);
    assert_eq!(evaluate(&board, Heuristic::Constructive), SOLVED_SCORE);
    assert!(safe_positions(&board).is_empty());
}

#[test]
fn full_8x8_solution_walk() {
    let mut board = Board::new(8);
    let cols = [0, 4, 7, 5, 2, 6, 1, 3];

    for (row, &col) in cols.iter().enumerate() {
        board.place_queen(Pos::new(row, col)).unwrap();
    }

    assert!(board.is_game_over());
    assert_eq!(evaluate(&board, Heuristic::Constructive), SOLVED_SCORE);
    assert_eq!(evaluate(&board, Heuristic::ConflictCount), 0);
}

#[test]
fn rejected_moves_do_not_advance_the_game() {
    let mut board = Board::new(5);
    board.place_queen(Pos::new(0, 0)).unwrap();

    let snapshot = board.clone();
    for bad in [Pos::new(0, 4), Pos::new(4, 4), Pos::new(4, 0), Pos::new(3, 3)] {
        assert_eq!(board.place_queen(bad), Err(PlaceError::UnsafePosition));
    }
    assert_eq!(board.place_queen(Pos::new(0, 0)), Err(PlaceError::CellOccupied));
    assert_eq!(board.place_queen(Pos::new(5, 0)), Err(PlaceError::InvalidPosition));
    assert_eq!(board, snapshot);
}

#[test]
fn reset_starts_a_fresh_game() {
    let mut board = Board::new(4);
    board.place_queen(Pos::new(1, 1)).unwrap();

    board.reset_to(8);
    assert_eq!(board.size(), 8);
    assert_eq!(safe_positions(&board).len(), 64);
    assert_eq!(evaluate(&board, Heuristic::Constructive), 64);
}
