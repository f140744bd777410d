use crate::{board::Board, types::Pos};

/// Collects all safe placements, returning a freshly allocated vector.
/// Internally delegates to `safe_positions_into`.
pub fn safe_positions(board: &Board) -> Vec<Pos> {
    let mut out = Vec::with_capacity(board.size() * board.size());
    safe_positions_into(board, &mut out);
    out
}

/// Collects all safe placements into the provided buffer, reusing it across
/// calls. Cells come out in strict row-major order (row ascending, then
/// column ascending) — move-selection tie-breaks depend on this ordering.
pub fn safe_positions_into(board: &Board, out: &mut Vec<Pos>) {
    out.clear();
    for row in 0..board.size() {
        for col in 0..board.size() {
            let at = Pos::new(row, col);
            if !board.is_occupied(at) && board.is_safe(at) {
                out.push(at);
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
