//! Elo rating calculation and tracking

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;

/// Default starting Elo for new engines
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Rating entry for a single engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineRating {
    pub elo: f64,
    pub games: u32,
}

impl Default for EngineRating {
    fn default() -> Self {
        Self {
            elo: DEFAULT_ELO,
            games: 0,
        }
    }
}

/// Elo rating system for tracking engine strength
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    /// Rating and game count for each engine (by name)
    pub ratings: HashMap<String, EngineRating>,
    /// Match history for analysis
    pub history: Vec<MatchRecord>,
}

/// Record of a single match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    pub timestamp: String,
    pub elo_change: f64,
}

/// Result of a single game, from the first engine's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::new()
    }
}

impl EloTracker {
    pub fn new() -> Self {
        Self {
            ratings: HashMap::new(),
            history: Vec::new(),
        }
    }

    /// Load tracker from a JSON file
    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ArenaError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save tracker to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), ArenaError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| ArenaError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get or initialize the rating for an engine
    pub fn get_rating(&mut self, engine: &str) -> f64 {
        self.ratings.entry(engine.to_string()).or_default().elo
    }

    /// Calculate expected score for engine1 against engine2
    pub fn expected_score(&mut self, engine1: &str, engine2: &str) -> f64 {
        let r1 = self.get_rating(engine1);
        let r2 = self.get_rating(engine2);
        1.0 / (1.0 + 10.0_f64.powf((r2 - r1) / 400.0))
    }

    /// Update ratings after a match
    pub fn update_ratings(&mut self, engine1: &str, engine2: &str, result: &MatchResult) {
        let expected = self.expected_score(engine1, engine2);
        let actual = result.score();

        let games = result.total_games();
        let elo_change = K_FACTOR * games as f64 * (actual - expected);

        {
            let entry = self.ratings.entry(engine1.to_string()).or_default();
            entry.elo += elo_change;
            entry.games += games;
        }
        {
            let entry = self.ratings.entry(engine2.to_string()).or_default();
            entry.elo -= elo_change;
            entry.games += games;
        }

        self.history.push(MatchRecord {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result: result.clone(),
            timestamp: unix_timestamp(),
            elo_change,
        });
    }

    /// Get a leaderboard sorted by rating, best first
    pub fn leaderboard(&self) -> Vec<(String, f64, u32)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, rating)| (name.clone(), rating.elo, rating.games))
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }

    /// Print leaderboard to stdout
    pub fn print_leaderboard(&self) {
        println!("\n=== Engine Leaderboard ===");
        println!("{:<30} {:>8} {:>8}", "Engine", "Elo", "Games");
        println!("{}", "-".repeat(50));
        for (name, rating, games) in self.leaderboard() {
            println!("{:<30} {:>8.1} {:>8}", name, rating, games);
        }
        println!();
    }
}

/// Simple timestamp without an external dependency
fn unix_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}", duration.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_ratings_expect_even_score() {
        let mut tracker = EloTracker::new();

        let expected = tracker.expected_score("engine1", "engine2");
        assert!((expected - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_higher_rating_expects_more() {
        let mut tracker = EloTracker::new();
        tracker.ratings.insert(
            "strong".to_string(),
            EngineRating {
                elo: 1700.0,
                games: 0,
            },
        );

        let expected = tracker.expected_score("strong", "engine2");
        assert!(expected > 0.5);
    }

    #[test]
    fn test_elo_update_moves_winner_up() {
        let mut tracker = EloTracker::new();

        // Engine1 wins all games
        let result = MatchResult {
            wins: 10,
            losses: 0,
            draws: 0,
        };
        tracker.update_ratings("engine1", "engine2", &result);

        assert!(tracker.get_rating("engine1") > DEFAULT_ELO);
        assert!(tracker.get_rating("engine2") < DEFAULT_ELO);
        assert_eq!(tracker.history.len(), 1);
    }

    #[test]
    fn test_ratings_are_zero_sum() {
        let mut tracker = EloTracker::new();

        let result = MatchResult {
            wins: 6,
            losses: 3,
            draws: 1,
        };
        tracker.update_ratings("engine1", "engine2", &result);

        let total = tracker.get_rating("engine1") + tracker.get_rating("engine2");
        assert!((total - 2.0 * DEFAULT_ELO).abs() < 1e-9);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let mut tracker = EloTracker::new();
        let result = MatchResult {
            wins: 3,
            losses: 1,
            draws: 0,
        };
        tracker.update_ratings("a", "b", &result);

        let path = std::env::temp_dir().join("arena_elo_roundtrip.json");
        tracker.save(&path).unwrap();
        let mut loaded = EloTracker::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.history.len(), 1);
        assert!((loaded.get_rating("a") - tracker.get_rating("a")).abs() < 1e-9);
    }
}
