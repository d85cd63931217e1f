pub mod board;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod values;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;
pub use values::{material, max_moves, positional};

// =============================================================================
// Engine trait - implemented by all xiangqi engines (minimax, random, etc.)
// =============================================================================

/// Limits for a search request.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Fixed search depth in plies
    pub depth: u8,
    /// Pick the second-best root move with probability 1/depth
    pub randomize: bool,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            randomize: false,
        }
    }

    pub fn randomized(depth: u8) -> Self {
        Self {
            depth,
            randomize: true,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the side to move has no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score from the searching side's perspective
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all xiangqi engines must implement.
///
/// This allows swapping between the alpha-beta engine, the random baseline,
/// and whatever comes next without touching the arena.
pub trait Engine: Send {
    /// Search the board with the given search limits.
    ///
    /// # Arguments
    /// * `board` - The current board to analyze
    /// * `limits` - Search limits (depth, randomization)
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for reports and leaderboards
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "xiangqi-arena"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
