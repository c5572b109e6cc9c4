//! Command-line win-rate simulator.
//!
//! ```text
//! monty-hall --trials 100000 --seed 7 --strategy all
//! RUST_LOG=monty_hall=debug monty-hall --trials 3
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use monty_hall::{run_strategies, SimulationConfig, SimulationStats, Simulator, Strategy};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Stay,
    Switch,
    Random,
    All,
}

impl StrategyArg {
    /// Strategies to simulate for this option.
    fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyArg::Stay => vec![Strategy::Stay],
            StrategyArg::Switch => vec![Strategy::Switch],
            StrategyArg::Random => vec![Strategy::Random],
            StrategyArg::All => Strategy::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "monty-hall", version, about = "Simulate the Monty Hall puzzle")]
struct Args {
    /// Rounds to play per strategy.
    #[arg(short, long, default_value_t = 1000)]
    trials: u32,

    /// RNG seed; a fresh one is drawn when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Contestant strategy to simulate.
    #[arg(long, value_enum, default_value_t = StrategyArg::All)]
    strategy: StrategyArg,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, trials = args.trials, strategy = ?args.strategy, "starting");

    let results: Vec<SimulationStats> = match args.strategy.strategies().as_slice() {
        [strategy] => vec![run_one(*strategy, args.trials, seed)?],
        strategies => run_strategies(strategies, args.trials, seed).context("simulation failed")?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("seed {}", seed);
        for stats in &results {
            println!("{}", stats);
        }
    }

    Ok(())
}

fn run_one(strategy: Strategy, trials: u32, seed: u64) -> Result<SimulationStats> {
    let config = SimulationConfig::new()
        .with_trials(trials)
        .with_seed(seed)
        .with_strategy(strategy);
    let stats = Simulator::new(config)
        .and_then(|mut sim| sim.run())
        .with_context(|| format!("simulating strategy '{}'", strategy))?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_strategy() {
        assert_eq!(StrategyArg::All.strategies(), Strategy::ALL.to_vec());
    }

    #[test]
    fn test_single_strategy_args() {
        assert_eq!(StrategyArg::Stay.strategies(), vec![Strategy::Stay]);
        assert_eq!(StrategyArg::Switch.strategies(), vec![Strategy::Switch]);
        assert_eq!(StrategyArg::Random.strategies(), vec![Strategy::Random]);
    }

    #[test]
    fn test_default_strategy_is_all() {
        let args = Args::try_parse_from(["monty-hall", "--trials", "300", "--seed", "1"]).unwrap();
        assert_eq!(args.strategy, StrategyArg::All);
        assert_eq!(args.trials, 300);
        assert_eq!(args.seed, Some(1));
    }

    #[test]
    fn test_all_runs_three_strategies() {
        let results = run_strategies(&StrategyArg::All.strategies(), 300, 1).unwrap();
        let names: Vec<_> = results.iter().map(|s| s.strategy.name()).collect();
        assert_eq!(names, vec!["stay", "switch", "random"]);
    }
}
