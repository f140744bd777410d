pub mod board;
pub mod eval;
pub mod movegen;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use eval::*;
pub use movegen::*;
pub use types::*;

use std::time::Duration;

// =============================================================================
// Engine trait — implemented by all N-Queens engines (alpha-beta, minimax, …)
// =============================================================================

/// Statistics for a single top-level search call.
///
/// Transient: produced once per `best_move` invocation and handed to the
/// presentation layer; never part of the board's state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Evaluation-node visits across the whole call, recursion included
    pub nodes: u64,
    /// Wall-clock time spent in the call
    pub elapsed: Duration,
}

impl SearchStats {
    /// Nodes per second, guarded against an elapsed time that rounds to
    /// zero on fast searches.
    pub fn nodes_per_second(&self) -> f64 {
        self.nodes as f64 / self.elapsed.as_secs_f64().max(1e-3)
    }
}

/// Result of a search operation
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// The chosen placement (None if no safe cell remains — the terminal
    /// signal, distinct from any score value)
    pub best_move: Option<Pos>,
    /// Score of the chosen placement, or the static evaluation when there
    /// is no move to make
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Search statistics for this call
    pub stats: SearchStats,
}

/// Trait that all N-Queens engines must implement.
///
/// The engine borrows the single active board mutably for the duration of
/// the call: search mutates it in place and restores it before returning,
/// so occupancy and `queens_remaining` are identical before and after.
/// Depth is the one configuration knob; change it between calls only.
pub trait Engine: Send {
    /// Chooses the automated player's next placement.
    fn best_move(&mut self, board: &mut Board, depth: u8) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game (clear counters, etc.)
    fn new_game(&mut self) {}
}
