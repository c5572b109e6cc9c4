//! Contestant strategies.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{GameError, RandomSource};

/// What the contestant does after the host's reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Keep the first pick.
    Stay,
    /// Move to the remaining closed door.
    #[default]
    Switch,
    /// Flip a fair coin each round.
    Random,
}

impl Strategy {
    /// All strategies, in display order.
    pub const ALL: [Strategy; 3] = [Strategy::Stay, Strategy::Switch, Strategy::Random];

    /// Decide whether to switch this round.
    pub fn should_switch<R: RandomSource + ?Sized>(self, rng: &mut R) -> bool {
        match self {
            Strategy::Stay => false,
            Strategy::Switch => true,
            Strategy::Random => rng.next_bool(),
        }
    }

    /// Long-run win probability with three doors.
    #[must_use]
    pub fn expected_win_rate(self) -> f64 {
        match self {
            Strategy::Stay => 1.0 / 3.0,
            Strategy::Switch => 2.0 / 3.0,
            Strategy::Random => 0.5,
        }
    }

    /// Lowercase name, as accepted by `from_str`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Stay => "stay",
            Strategy::Switch => "switch",
            Strategy::Random => "random",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stay" => Ok(Strategy::Stay),
            "switch" => Ok(Strategy::Switch),
            "random" => Ok(Strategy::Random),
            _ => Err(GameError::UnknownStrategy(s.to_string())),
        }
    }
}
