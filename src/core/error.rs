//! Error type shared by the game and the simulation driver.

use thiserror::Error;

/// Errors raised by game operations and simulation setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A door index outside `0..door_count`.
    #[error("door index {index} out of range (game has {door_count} doors)")]
    IndexOutOfRange { index: usize, door_count: usize },

    /// The host has no door that is both losing and unselected.
    #[error("no door is eligible for the host to open")]
    NoEligibleDoor,

    /// Simulation parameters that cannot produce a run.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    /// A strategy name that does not parse.
    #[error("unknown strategy '{0}' (expected stay, switch or random)")]
    UnknownStrategy(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
