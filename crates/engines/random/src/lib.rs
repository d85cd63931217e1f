//! Random Move Xiangqi Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Testing infrastructure before wiring up a real engine
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use rand::seq::SliceRandom;
use rand::thread_rng;
use xiangqi_core::{legal_moves_into, Board, Engine, SearchLimits, SearchResult};

#[cfg(test)]
mod lib_tests;

/// A xiangqi engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves. It's the simplest possible engine
/// and serves as a baseline for testing.
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
    fn search(&mut self, board: &Board, _limits: SearchLimits) -> SearchResult {
        self.nodes = 0;

        let mut board_copy = board.clone();
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(&mut board_copy, &mut moves);

        self.nodes = 1;

        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn author(&self) -> &str {
        "xiangqi-arena"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
