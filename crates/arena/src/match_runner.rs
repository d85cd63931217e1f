//! Match runner for playing games between engines

use tracing::{debug, info, trace, warn};
use xiangqi_core::{has_no_legal_moves, sq_to_coord, Board, Engine, SearchLimits, Side};

use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Let engines pick their second-best line some of the time
    pub randomize: bool,
    /// Maximum plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate sides each game
    pub alternate_sides: bool,
    /// Log progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            randomize: true,
            max_plies: 200,
            alternate_sides: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Create search limits based on this config
    fn search_limits(&self) -> SearchLimits {
        if self.randomize {
            SearchLimits::randomized(self.depth)
        } else {
            SearchLimits::depth(self.depth)
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate sides if configured
            let engine1_red = !self.config.alternate_sides || game_num % 2 == 0;

            let game_result = if engine1_red {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 is Black
                match self.play_game(engine2, engine1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }

            if self.config.verbose {
                let side = if engine1_red { "R" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                info!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    side,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns result from Red's perspective
    fn play_game(&self, red: &mut dyn Engine, black: &mut dyn Engine) -> GameResult {
        let mut board = Board::startpos();
        red.new_game();
        black.new_game();

        for ply in 0..self.config.max_plies {
            let limits = self.config.search_limits();

            let result = if board.side_to_move == Side::Red {
                red.search(&board, limits)
            } else {
                black.search(&board, limits)
            };

            match result.best_move {
                Some(mv) => {
                    trace!(
                        "ply {}: {} {}{}",
                        ply,
                        sq_to_coord(mv.from),
                        sq_to_coord(mv.to),
                        if mv.captured.is_some() { " (capture)" } else { "" }
                    );
                    board.apply(mv);
                }
                None => {
                    // A side with no legal moves has lost, mated or not.
                    // Returning no move in a live position forfeits the game.
                    if has_no_legal_moves(&board, board.side_to_move) {
                        debug!(
                            "game over after {} plies: {:?} has no move",
                            ply, board.side_to_move
                        );
                    } else {
                        warn!(
                            side = ?board.side_to_move,
                            "engine returned no move in a live position"
                        );
                    }
                    return if board.side_to_move == Side::Red {
                        GameResult::Loss
                    } else {
                        GameResult::Win
                    };
                }
            }
        }

        debug!("game drawn at the {}-ply cap", self.config.max_plies);
        GameResult::Draw
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_engine::MinimaxEngine;
    use random_engine::RandomEngine;

    #[test]
    fn test_self_play() {
        let mut engine1 = MinimaxEngine::new();
        let mut engine2 = MinimaxEngine::new();

        let config = MatchConfig {
            num_games: 2,
            depth: 2,
            max_plies: 50,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(&mut engine1, &mut engine2);

        // Self-play should complete without panic
        assert_eq!(result.total_games(), 2);
    }

    #[test]
    fn test_random_engines_finish_games() {
        let mut engine1 = RandomEngine::new();
        let mut engine2 = RandomEngine::new();

        let config = MatchConfig {
            num_games: 4,
            depth: 1,
            max_plies: 150,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(&mut engine1, &mut engine2);

        assert_eq!(result.total_games(), 4);
    }

    #[test]
    fn test_mixed_engines_complete_a_match() {
        let mut minimax = MinimaxEngine::new();
        let mut random = RandomEngine::new();

        let config = MatchConfig {
            num_games: 2,
            depth: 2,
            randomize: false,
            max_plies: 150,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(&mut minimax, &mut random);

        assert_eq!(result.total_games(), 2);
    }
}
