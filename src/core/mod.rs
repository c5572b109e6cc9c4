//! Core types: doors, errors, and random sources.
//!
//! The game and the simulation driver build on these; nothing here knows
//! about strategies or scoring.

pub mod door;
pub mod error;
pub mod rng;

pub use door::{Door, DOOR_COUNT};
pub use error::{GameError, Result};
pub(crate) use rng::draw_index;
pub use rng::{GameRng, GameRngState, RandomSource, SequenceSource};
