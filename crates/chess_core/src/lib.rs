pub mod board;
pub mod check;
pub mod history;
pub mod perft;
pub mod rules;
pub mod session;
pub mod types;

// Re-export the game-facing surface
pub use board::{AutoQueen, Board, PromotionChooser};
pub use check::{
    attacked_player, in_checkmate_or_stalemate, leaves_king_in_check, legal_moves,
    legal_moves_into, position_status, update_check_status,
};
pub use history::{HistoryFrame, HistoryStack, HISTORY_CAPACITY};
pub use perft::perft;
pub use rules::is_legal_move;
pub use session::{Controller, GameSession, MoveError};
pub use types::*;

// =============================================================================
// Engine trait — implemented by automated players (searching, random, ...)
// =============================================================================

/// Limits for one move decision. Search here is fixed-depth only; there is
/// no clock-driven stopping.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Search depth in plies (half-moves).
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> SearchLimits {
        SearchLimits { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits { depth: 4 }
    }
}

/// Result of asking an engine for a move.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None when the side to move has no legal moves).
    pub best_move: Option<Move>,
    /// Value of the chosen line, white-positive.
    pub value: i32,
    /// Depth the decision was searched to.
    pub depth: u8,
    /// Number of tree nodes visited.
    pub nodes: u64,
    /// True when the search arena filled up and some subtree was cut short.
    pub arena_exhausted: bool,
}

/// An automated player: given a board and the side to move, produce a move.
/// `Send` so engines can be driven from worker threads.
pub trait Engine: Send {
    fn search(&mut self, board: &Board, to_move: Color, limits: SearchLimits) -> SearchResult;

    /// Human-readable engine name.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
