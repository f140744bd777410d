use super::*;
use queens_core::Pos;

#[test]
fn random_engine_returns_safe_move() {
    let mut engine = RandomEngine::new();
    let mut board = Board::new(5);
    board.place_queen(Pos::new(0, 0)).unwrap();

    let result = engine.best_move(&mut board, 1);

    let mv = result.best_move.unwrap();
    assert!(safe_positions(&board).contains(&mv));
    assert!(board.is_safe(mv));
}

#[test]
fn random_engine_handles_solved_board() {
    let mut engine = RandomEngine::new();
    let mut board = Board::new(4);
    for at in [
        Pos::new(0, 1),
        Pos::new(1, 3),
        Pos::new(2, 0),
        Pos::new(3, 2),
    ] {
        board.place_queen(at).unwrap();
    }

    let result = engine.best_move(&mut board, 1);
    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_dead_end() {
    let mut engine = RandomEngine::new();
    let mut board = Board::new(4);
    for at in [Pos::new(0, 0), Pos::new(2, 3), Pos::new(3, 1)] {
        board.place_queen(at).unwrap();
    }

    let result = engine.best_move(&mut board, 1);
    assert!(result.best_move.is_none());
}
