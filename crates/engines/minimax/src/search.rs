//! Plain minimax search, no pruning
//!
//! Same move enumeration, terminal conditions, tie-break, and apply/undo
//! discipline as the alpha-beta engine, but every sibling is visited.

use queens_core::{evaluate, safe_positions, safe_positions_into, Board, Heuristic, Pos};

/// Searches the board and returns the best placement with its score.
/// Ties keep the row-major-earliest candidate; `None` when no safe cell
/// remains.
pub fn pick_best_move(
    board: &mut Board,
    depth: u8,
    heuristic: Heuristic,
    nodes: &mut u64,
) -> Option<(Pos, i32)> {
    let candidates = safe_positions(board);
    if candidates.is_empty() {
        return None;
    }

    let root_max = heuristic.maximizing_root();
    let mut best = candidates[0];
    let mut best_score = if root_max { i32::MIN + 1 } else { i32::MAX - 1 };

    for mv in candidates {
        board.make_move(mv);
        let score = minimax(board, depth, !root_max, heuristic, nodes);
        board.unmake_move(mv);

        let improves = if root_max {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best = mv;
        }
    }

    Some((best, best_score))
}

/// Recursive minimax evaluation. Terminal on exhausted depth, a full board,
/// or no safe placements.
pub fn minimax(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    heuristic: Heuristic,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 || board.is_game_over() {
        return evaluate(board, heuristic);
    }

    let mut moves = Vec::with_capacity(board.size() * board.size());
    safe_positions_into(board, &mut moves);
    if moves.is_empty() {
        return evaluate(board, heuristic);
    }

    if maximizing {
        let mut best = i32::MIN + 1;
        for mv in moves {
            board.make_move(mv);
            let score = minimax(board, depth - 1, false, heuristic, nodes);
            board.unmake_move(mv);
            best = best.max(score);
        }
        best
    } else {
        let mut best = i32::MAX - 1;
        for mv in moves {
            board.make_move(mv);
            let score = minimax(board, depth - 1, true, heuristic, nodes);
            board.unmake_move(mv);
            best = best.min(score);
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
