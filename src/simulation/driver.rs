//! Simulation driver: plays many independent rounds and scores them.
//!
//! Each round follows the fixed script of the puzzle:
//! 1. Build a game with a random prize door
//! 2. Contestant picks a random door
//! 3. Host opens a losing, unpicked door
//! 4. Contestant keeps or switches according to the strategy
//! 5. Score the final pick

use tracing::{debug, info};

use super::{RoundOutcome, SimulationConfig, SimulationStats, Strategy};
use crate::core::{draw_index, GameError, GameRng, RandomSource, Result, DOOR_COUNT};
use crate::game::Game;

/// Plays rounds for one strategy with a seeded RNG.
#[derive(Clone, Debug)]
pub struct Simulator {
    config: SimulationConfig,
    rng: GameRng,
}

impl Simulator {
    /// Create a simulator. Fails on an invalid config.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        Ok(Self { config, rng })
    }

    /// Create a simulator drawing from an existing RNG stream.
    pub fn with_rng(config: SimulationConfig, rng: GameRng) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play one round.
    pub fn play_round(&mut self) -> Result<RoundOutcome> {
        play_round(self.config.strategy, &mut self.rng)
    }

    /// Play `config.trials` rounds and aggregate them.
    pub fn run(&mut self) -> Result<SimulationStats> {
        let mut stats = SimulationStats::new(self.config.strategy);
        for _ in 0..self.config.trials {
            let outcome = self.play_round()?;
            stats.record(&outcome);
        }
        info!(
            strategy = %stats.strategy,
            trials = stats.trials,
            wins = stats.wins,
            win_rate = stats.win_rate(),
            "simulation finished"
        );
        Ok(stats)
    }
}

/// Play one round of the puzzle with any random source.
pub fn play_round<R: RandomSource + ?Sized>(strategy: Strategy, rng: &mut R) -> Result<RoundOutcome> {
    let mut game = Game::new(rng);

    let first_pick = draw_index(rng, DOOR_COUNT);
    game.select_door(first_pick)?;

    let revealed = game.open_non_winning_door(rng)?;

    let switched = strategy.should_switch(rng);
    let final_pick = if switched {
        let target = game.switch_target().ok_or(GameError::NoEligibleDoor)?;
        game.select_door(target)?;
        target
    } else {
        first_pick
    };

    let won = game.door(final_pick)?.is_winner();
    debug!(%game, first_pick, revealed, final_pick, won, "round complete");

    Ok(RoundOutcome {
        winner: game.winning_door(),
        first_pick,
        revealed,
        final_pick,
        switched,
        won,
    })
}

/// Run several strategies side by side from one seed.
///
/// The n-th strategy draws from the n-th fork of the seed's stream, so a
/// strategy's result depends only on its position, not on the others.
pub fn run_strategies(strategies: &[Strategy], trials: u32, seed: u64) -> Result<Vec<SimulationStats>> {
    let mut root = GameRng::new(seed);
    let base = SimulationConfig::new().with_trials(trials).with_seed(seed);

    strategies
        .iter()
        .map(|&strategy| run_forked(&mut root, &base, strategy))
        .collect()
}

/// Run staying and switching side by side from one seed.
///
/// Matches the first two entries of `run_strategies` over
/// `[Stay, Switch]`.
pub fn compare_strategies(trials: u32, seed: u64) -> Result<[SimulationStats; 2]> {
    let mut root = GameRng::new(seed);
    let base = SimulationConfig::new().with_trials(trials).with_seed(seed);

    let stay = run_forked(&mut root, &base, Strategy::Stay)?;
    let switch = run_forked(&mut root, &base, Strategy::Switch)?;

    Ok([stay, switch])
}

fn run_forked(root: &mut GameRng, base: &SimulationConfig, strategy: Strategy) -> Result<SimulationStats> {
    Simulator::with_rng(base.clone().with_strategy(strategy), root.fork())?.run()
}
