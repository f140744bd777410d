//! Random Placement N-Queens Engine
//!
//! A simple engine that places on a uniformly random safe cell.
//! Useful for:
//! - Baseline comparisons (any searching engine should easily beat this)
//! - Stress testing move generation and the game loop

use std::time::Instant;

use queens_core::{
    evaluate, safe_positions, Board, Engine, Heuristic, SearchResult, SearchStats,
};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// An engine that plays random safe placements.
///
/// No lookahead at all: it enumerates the currently safe cells and picks
/// one at random. The score reported is the static evaluation of the board
/// it was handed.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn best_move(&mut self, board: &mut Board, _depth: u8) -> SearchResult {
        let start = Instant::now();
        self.nodes = 1;

        let moves = safe_positions(board);
        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: evaluate(board, Heuristic::Constructive),
            depth: 1,
            stats: SearchStats {
                nodes: self.nodes,
                elapsed: start.elapsed(),
            },
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
