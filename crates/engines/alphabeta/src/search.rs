//! Minimax search with alpha-beta pruning
//!
//! The search mutates the caller's board in place: each candidate placement
//! is applied with `make_move`, explored, and reverted with `unmake_move`
//! before the next sibling. Nothing between apply and undo can fail, so every
//! return path leaves the board exactly as it was found.

use queens_core::{evaluate, safe_positions, safe_positions_into, Board, Heuristic, Pos};

/// Searches the board and returns the best placement with its score.
///
/// Candidates are tried in the board's row-major order and evaluated with the
/// configured depth from the opponent's perspective. Only a strictly better
/// score replaces the incumbent, so equal-scoring candidates resolve to the
/// row-major-earliest one. Returns `None` when no safe cell remains.
///
/// # Arguments
/// * `board` - The shared board; restored to its entry state before returning
/// * `depth` - Search depth in plies for each candidate
/// * `heuristic` - Evaluation policy, which also fixes the root orientation
/// * `nodes` - Counter for nodes searched (for statistics)
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
        // The mover has just placed, so the next ply belongs to the opponent.
        // Each candidate gets a fresh full window.
        let score = alpha_beta(
            board,
            depth,
            i32::MIN / 2,
            i32::MAX / 2,
            !root_max,
            heuristic,
            nodes,
        );
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

/// Recursive alpha-beta evaluation.
///
/// Terminal on exhausted depth, a full board, or no safe placements, where
/// the static evaluation is returned. `maximizing` says whose ply this is
/// relative to the heuristic's raw score; pruning stops sibling evaluation
/// once `beta <= alpha` without affecting the returned value.
pub fn alpha_beta(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
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
            let score = alpha_beta(board, depth - 1, alpha, beta, false, heuristic, nodes);
            board.unmake_move(mv);

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        best
    } else {
        let mut best = i32::MAX - 1;
        for mv in moves {
            board.make_move(mv);
            let score = alpha_beta(board, depth - 1, alpha, beta, true, heuristic, nodes);
            board.unmake_move(mv);

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
