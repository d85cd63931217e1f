//! Engine Arena for Xiangqi
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Tracking Elo ratings across engine versions
//! - Generating reports from match series
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax and random engines
//! cargo run -p arena -- match minimax random --games 20 --depth 4
//!
//! # Run a gauntlet (one engine vs all others)
//! cargo run -p arena -- gauntlet minimax --games 10
//! ```

mod config;
mod elo;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use elo::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
