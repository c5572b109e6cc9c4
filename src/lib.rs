//! # monty-hall
//!
//! A small, seedable engine for the Monty Hall puzzle and a Monte Carlo
//! driver that checks the 2/3 switching advantage empirically.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: `Game` never touches ambient RNG state. The
//!    prize placement and the host's reveal both draw from a caller-supplied
//!    [`RandomSource`], so tests can script exact outcomes.
//!
//! 2. **No Unbounded Loops**: the host samples directly from the set of
//!    eligible doors instead of retrying random draws.
//!
//! 3. **Errors, Not Panics**: bad door indices come back as
//!    [`GameError::IndexOutOfRange`] with the game left untouched.
//!
//! ```
//! use monty_hall::{Game, GameRng};
//!
//! let mut rng = GameRng::new(7);
//! let mut game = Game::new(&mut rng);
//! game.select_door(0)?;
//! let opened = game.open_non_winning_door(&mut rng)?;
//! assert!(!game.doors()[opened].is_winner());
//! # Ok::<(), monty_hall::GameError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: doors, errors, random sources
//! - `game`: the three-door state machine
//! - `simulation`: strategies, configuration, and win-rate statistics

pub mod core;
pub mod game;
pub mod simulation;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Door, DOOR_COUNT,
    GameError, Result,
    GameRng, GameRngState, RandomSource, SequenceSource,
};

pub use crate::game::{EligibleDoors, Game};

pub use crate::simulation::{
    compare_strategies, play_round, run_strategies,
    RoundOutcome, SimulationConfig, SimulationStats, Simulator, Strategy,
};
