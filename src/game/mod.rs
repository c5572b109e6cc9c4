//! The three-door game.
//!
//! - One door hides the prize, chosen at construction
//! - The contestant selects a door, and may reselect to switch
//! - The host opens a door that is neither the prize nor the pick

mod state;

pub use state::{EligibleDoors, Game};
