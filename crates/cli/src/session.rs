//! Game session management
//!
//! Holds the single active board, the selected engine, and the knobs the
//! frontend may turn between moves.

use queens_core::{
    evaluate, safe_positions, Board, Engine, Heuristic, PlaceError, Pos, SearchResult,
};

/// State of the running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Queens left to place and at least one safe cell open
    InProgress,
    /// Every queen placed
    Solved,
    /// Queens left but no safe cell remains
    DeadEnd,
}

/// One human-vs-engine game.
pub struct GameSession {
    pub board: Board,
    engine: Box<dyn Engine>,
    /// Search depth knob; only changed between engine calls
    pub depth: u8,
    pub heuristic: Heuristic,
    pub outcome: GameOutcome,
}

impl GameSession {
    pub fn new(size: usize, engine: Box<dyn Engine>, depth: u8, heuristic: Heuristic) -> Self {
        Self {
            board: Board::new(size),
            engine,
            depth,
            heuristic,
            outcome: GameOutcome::InProgress,
        }
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Swaps the automated opponent. The board carries on unchanged.
    pub fn set_engine(&mut self, engine: Box<dyn Engine>) {
        self.engine = engine;
    }

    /// Applies the human's placement, refusing illegal cells.
    pub fn place_human(&mut self, at: Pos) -> Result<(), PlaceError> {
        self.board.place_queen(at)?;
        self.refresh_outcome();
        Ok(())
    }

    /// Runs the engine's turn: searches, applies the chosen move if there is
    /// one, and hands back the result with its statistics.
    pub fn engine_move(&mut self) -> SearchResult {
        let result = self.engine.best_move(&mut self.board, self.depth);
        if let Some(mv) = result.best_move {
            // Engines only propose cells off the safe list.
            self.board
                .place_queen(mv)
                .expect("engine proposed an unsafe cell");
        }
        self.refresh_outcome();
        result
    }

    /// Best move for the current position without applying it.
    pub fn hint(&mut self) -> SearchResult {
        self.engine.best_move(&mut self.board, self.depth)
    }

    /// Static evaluation of the current position.
    pub fn evaluation(&self) -> i32 {
        evaluate(&self.board, self.heuristic)
    }

    /// Starts over on a fresh board of the given size.
    pub fn reset_to(&mut self, size: usize) {
        self.board.reset_to(size);
        self.engine.new_game();
        self.outcome = GameOutcome::InProgress;
    }

    fn refresh_outcome(&mut self) {
        self.outcome = if self.board.is_game_over() {
            GameOutcome::Solved
        } else if safe_positions(&self.board).is_empty() {
            GameOutcome::DeadEnd
        } else {
            GameOutcome::InProgress
        };
    }
}
