//! Minimax N-Queens Engine
//!
//! Exhaustive depth-bounded minimax without pruning. Slower than the
//! alpha-beta engine on the same settings but visits the full game tree,
//! which makes it the reference for pruning-equivalence checks.

mod search;

use std::time::Instant;

use queens_core::{evaluate, Board, Engine, Heuristic, SearchResult, SearchStats};

/// N-Queens engine using plain minimax.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    heuristic: Heuristic,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    /// Default search depth; shallow, since nothing is pruned.
    pub const DEFAULT_DEPTH: u8 = 3;

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

impl Engine for MinimaxEngine {
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
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use search::{minimax, pick_best_move};
