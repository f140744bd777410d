//! Alpha-Beta N-Queens Engine
//!
//! Depth-bounded adversarial search with alpha-beta pruning over the shared
//! mutable board. This is the main automated opponent.

mod search;

use std::time::Instant;

use queens_core::{evaluate, Board, Engine, Heuristic, SearchResult, SearchStats};

/// N-Queens engine using alpha-beta pruned minimax.
///
/// Pruning is a performance optimization only: for any board and depth the
/// returned move and score match the unpruned search, it just visits fewer
/// nodes. Per-call statistics (nodes, elapsed time, nodes/second) ride along
/// in the result for the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaEngine {
    heuristic: Heuristic,
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaEngine {
    /// Default search depth for the top-level driver.
    pub const DEFAULT_DEPTH: u8 = 4;

    pub fn new() -> Self {
        Self::with_heuristic(Heuristic::default())
    }

    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        Self { heuristic, nodes: 0 }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl Engine for AlphaBetaEngine {
    fn best_move(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        let start = Instant::now();
        let picked = search::pick_best_move(board, depth, self.heuristic, &mut self.nodes);
        let elapsed = start.elapsed();

        SearchResult {
            best_move: picked.map(|(mv, _)| mv),
            score: picked
                .map(|(_, score)| score)
                .unwrap_or_else(|| evaluate(board, self.heuristic)),
            depth,
            stats: SearchStats {
                nodes: self.nodes,
                elapsed,
            },
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use search::{alpha_beta, pick_best_move};
