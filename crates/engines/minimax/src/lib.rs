//! Minimax Xiangqi Engine
//!
//! Fixed-depth alpha-beta search over ordered moves with a dynamic material,
//! positional, mobility and central-control evaluation.

mod eval;
mod search;

use xiangqi_core::{Board, Engine, SearchLimits, SearchResult};

/// Alpha-beta xiangqi engine.
///
/// This engine uses:
/// - Fixed-depth alpha-beta with fail-hard bounds
/// - Root move ordering with best and second-best tracking
/// - Optional randomized choice between the two top root moves
/// - Piece values that drift with the committed-move count
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;

        let outcome =
            search::pick_best_move(board, limits.depth, limits.randomize, &mut self.nodes);

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, value)| value).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn author(&self) -> &str {
        "xiangqi-arena"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, mobility};
