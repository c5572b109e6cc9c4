//! Simulation configuration.

use serde::{Deserialize, Serialize};

use super::Strategy;
use crate::core::{GameError, Result};

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of independent rounds to play.
    pub trials: u32,

    /// Random seed. Same seed and strategy produce identical runs.
    pub seed: u64,

    /// Contestant behaviour after the host's reveal.
    pub strategy: Strategy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            seed: 42,
            strategy: Strategy::Switch,
        }
    }
}

impl SimulationConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Reject configs that cannot produce a run.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(GameError::InvalidConfig("trials must be > 0"));
        }
        Ok(())
    }
}
