//! Arena configuration, loadable from a TOML file

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;
use crate::match_runner::MatchConfig;

/// Settings for a series of matches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Games per engine pairing
    pub games_per_match: u32,
    /// Search depth in plies
    pub search_depth: u8,
    /// Let engines vary their play between games
    pub randomize: bool,
    /// Plies before a game is scored as a draw
    pub max_plies: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            search_depth: 4,
            randomize: true,
            max_plies: 200,
        }
    }
}

impl ArenaConfig {
    /// Load configuration from a TOML file; missing keys fall back to defaults
    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ArenaError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Expand into a full match configuration
    pub fn match_config(&self, verbose: bool) -> MatchConfig {
        MatchConfig {
            num_games: self.games_per_match,
            depth: self.search_depth,
            randomize: self.randomize,
            max_plies: self.max_plies,
            alternate_sides: true,
            verbose,
        }
    }
}
