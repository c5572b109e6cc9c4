//! A single door and its three flags.

use serde::{Deserialize, Serialize};

/// Number of doors in every game.
pub const DOOR_COUNT: usize = 3;

/// One of the three doors.
///
/// `is_winner` is fixed when the game is built. `is_selected` is driven by
/// `Game::select_door`. `is_open` only ever goes from `false` to `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Door {
    pub(crate) is_winner: bool,
    pub(crate) is_selected: bool,
    pub(crate) is_open: bool,
}

impl Door {
    /// Create a closed, unselected door.
    #[must_use]
    pub const fn new(is_winner: bool) -> Self {
        Self {
            is_winner,
            is_selected: false,
            is_open: false,
        }
    }

    /// Does this door hide the prize?
    #[must_use]
    pub const fn is_winner(&self) -> bool {
        self.is_winner
    }

    /// Is this the contestant's current pick?
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Has this door been revealed?
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Could the host reveal this door?
    #[must_use]
    pub const fn is_host_eligible(&self) -> bool {
        !self.is_winner && !self.is_selected
    }
}

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let contents = if self.is_open {
            if self.is_winner { "prize" } else { "goat" }
        } else {
            "closed"
        };
        if self.is_selected {
            write!(f, "[{}]", contents)
        } else {
            write!(f, "{}", contents)
        }
    }
}
