//! Round outcomes and aggregated win statistics.

use serde::{Deserialize, Serialize};

use super::Strategy;

/// What happened in a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Door hiding the prize.
    pub winner: usize,
    /// Contestant's first pick.
    pub first_pick: usize,
    /// Door the host opened.
    pub revealed: usize,
    /// Door held at the end of the round.
    pub final_pick: usize,
    /// Did the contestant change doors?
    pub switched: bool,
    /// Is the final pick the prize door?
    pub won: bool,
}

impl RoundOutcome {
    /// Was the first pick already the prize?
    #[must_use]
    pub fn first_pick_won(&self) -> bool {
        self.first_pick == self.winner
    }
}

/// Win statistics for one strategy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Strategy that produced these rounds.
    pub strategy: Strategy,

    /// Rounds played.
    pub trials: u32,

    /// Rounds where the final pick was the prize.
    pub wins: u32,

    /// Rounds where the contestant switched.
    pub switches: u32,

    /// Rounds where the first pick was the prize.
    pub first_pick_wins: u32,
}

impl SimulationStats {
    /// Create empty statistics.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            trials: 0,
            wins: 0,
            switches: 0,
            first_pick_wins: 0,
        }
    }

    /// Fold one round into the totals.
    pub fn record(&mut self, outcome: &RoundOutcome) {
        self.trials += 1;
        self.wins += u32::from(outcome.won);
        self.switches += u32::from(outcome.switched);
        self.first_pick_wins += u32::from(outcome.first_pick_won());
    }

    /// Rounds lost.
    #[must_use]
    pub fn losses(&self) -> u32 {
        self.trials.saturating_sub(self.wins)
    }

    /// Fraction of rounds won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        ratio(self.wins, self.trials)
    }

    /// Fraction of rounds where the first pick was right.
    #[must_use]
    pub fn first_pick_win_rate(&self) -> f64 {
        ratio(self.first_pick_wins, self.trials)
    }

    /// Observed win rate minus the strategy's theoretical rate.
    #[must_use]
    pub fn deviation_from_expected(&self) -> f64 {
        self.win_rate() - self.strategy.expected_win_rate()
    }
}

impl std::fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<6} {:>5}/{:<5} won ({:>6.2}%, expected {:>6.2}%), switched {}",
            self.strategy.name(),
            self.wins,
            self.trials,
            self.win_rate() * 100.0,
            self.strategy.expected_win_rate() * 100.0,
            self.switches
        )
    }
}

fn ratio(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(count) / f64::from(total)
    }
}
