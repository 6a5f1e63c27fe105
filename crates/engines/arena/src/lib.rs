//! Arena Alpha-Beta Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a bump-allocated node
//! arena. Children are kept heap-sorted by their cached values to improve
//! pruning order; the arena is reset wholesale between move decisions.

mod arena;
mod eval;
mod search;

pub use arena::{ArenaFull, Node, SearchArena, DEFAULT_NODE_CAPACITY};
pub use eval::evaluate;
pub use search::{pick_best_move, SearchOutcome};

use chess_core::{Board, Color, Engine, SearchLimits, SearchResult};

/// The automated player: owns its arena and reuses the allocation across
/// decisions.
pub struct ArenaEngine {
    arena: SearchArena,
    nodes: u64,
}

impl ArenaEngine {
    pub fn new() -> ArenaEngine {
        ArenaEngine::with_capacity(DEFAULT_NODE_CAPACITY)
    }

    /// Engine with an explicit node cap, mainly for tests and small
    /// configurations.
    pub fn with_capacity(capacity: usize) -> ArenaEngine {
        ArenaEngine {
            arena: SearchArena::new(capacity),
            nodes: 0,
        }
    }
}

impl Default for ArenaEngine {
    fn default() -> Self {
        ArenaEngine::new()
    }
}

impl Engine for ArenaEngine {
    fn search(&mut self, board: &Board, to_move: Color, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        let outcome = pick_best_move(&mut self.arena, board, to_move, limits.depth, &mut self.nodes);
        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            value: outcome.best_move.map(|(_, v)| v).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
            arena_exhausted: outcome.arena_exhausted,
        }
    }

    fn name(&self) -> &str {
        "Arena Alpha-Beta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
