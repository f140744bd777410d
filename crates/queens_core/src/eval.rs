//! Static position evaluation
//!
//! Two heuristics with opposite optimization directions live here as one
//! pluggable policy. The polarity travels with the policy: callers ask
//! `maximizing_root()` instead of hard-coding a sign convention.

use crate::{board::Board, types::Pos};

/// Score for a fully placed board under [`Heuristic::Constructive`].
pub const SOLVED_SCORE: i32 = 1000;
/// Score for a board with no safe cells left and queens still unplaced.
pub const DEAD_END_SCORE: i32 = -1000;

/// Evaluation policy for the search engines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// Rewards progress toward a full legal placement: +1000 solved, -1000
    /// dead end, otherwise `10 * queens_placed + safe_position_count`.
    /// Higher is better.
    #[default]
    Constructive,
    /// Counts rows, columns, and diagonals (both orientations) holding more
    /// than one queen. Lower is better; only meaningful on boards where
    /// conflicting placements can occur at all.
    ConflictCount,
}

impl Heuristic {
    /// Whether the automated player maximizes this heuristic at the search
    /// root. The opponent's plies take the opposite orientation.
    pub fn maximizing_root(self) -> bool {
        match self {
            Heuristic::Constructive => true,
            Heuristic::ConflictCount => false,
        }
    }
}

/// Evaluates the board under the chosen heuristic.
pub fn evaluate(board: &Board, heuristic: Heuristic) -> i32 {
    match heuristic {
        Heuristic::Constructive => constructive(board),
        Heuristic::ConflictCount => conflict_count(board),
    }
}

fn constructive(board: &Board) -> i32 {
    if board.is_game_over() {
        return SOLVED_SCORE;
    }

    let safe = count_safe(board);
    if safe == 0 {
        return DEAD_END_SCORE;
    }

    10 * board.queens_placed() as i32 + safe as i32
}

fn count_safe(board: &Board) -> usize {
    let mut count = 0;
    for row in 0..board.size() {
        for col in 0..board.size() {
            if board.is_safe(Pos::new(row, col)) {
                count += 1;
            }
        }
    }
    count
}

fn conflict_count(board: &Board) -> i32 {
    let n = board.size();
    let mut rows = vec![0u32; n];
    let mut cols = vec![0u32; n];
    // Diagonals indexed by row+col; anti-diagonals by row-col shifted by n-1.
    let mut diags = vec![0u32; 2 * n - 1];
    let mut antis = vec![0u32; 2 * n - 1];

    for q in board.queens() {
        rows[q.row] += 1;
        cols[q.col] += 1;
        diags[q.row + q.col] += 1;
        antis[q.row + n - 1 - q.col] += 1;
    }

    let overloaded = |counts: &[u32]| counts.iter().filter(|&&c| c > 1).count() as i32;
    overloaded(&rows) + overloaded(&cols) + overloaded(&diags) + overloaded(&antis)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
