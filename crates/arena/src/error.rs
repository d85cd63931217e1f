//! Error type for arena persistence

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or saving arena state on disk
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid TOML in {}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
