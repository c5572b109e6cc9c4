//! Monte Carlo driver for the puzzle.
//!
//! Plays many independent games under a fixed contestant strategy and
//! aggregates how often the final pick wins.

mod config;
mod driver;
mod stats;
mod strategy;

pub use config::SimulationConfig;
pub use driver::{compare_strategies, play_round, run_strategies, Simulator};
pub use stats::{RoundOutcome, SimulationStats};
pub use strategy::Strategy;
