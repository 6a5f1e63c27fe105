//! Random Move Baseline Engine
//!
//! Picks uniformly among all legal moves. Useful as a weak opponent and
//! for smoke testing the driver loop without paying for a real search.

use chess_core::{legal_moves, Board, Color, Engine, SearchLimits, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> RandomEngine {
        RandomEngine
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, to_move: Color, limits: SearchLimits) -> SearchResult {
        let moves = legal_moves(board, to_move);
        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            value: 0,
            depth: limits.depth.min(1),
            nodes: moves.len() as u64,
            arena_exhausted: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
