//! Simulation bindings for Python.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::simulation::{SimulationConfig, Simulator, Strategy};

use super::py_games::to_py_err;

/// Run a simulation and return its statistics as a dict.
///
/// # Arguments
/// - strategy: "stay", "switch" or "random" (default: "switch")
/// - trials: Rounds to play (default: 1000)
/// - seed: RNG seed (default: 42)
#[pyfunction]
#[pyo3(signature = (strategy = "switch", trials = 1000, seed = 42))]
pub fn simulate<'py>(
    py: Python<'py>,
    strategy: &str,
    trials: u32,
    seed: u64,
) -> PyResult<Bound<'py, PyDict>> {
    let strategy: Strategy = strategy.parse().map_err(to_py_err)?;
    let config = SimulationConfig::new()
        .with_trials(trials)
        .with_seed(seed)
        .with_strategy(strategy);
    let stats = Simulator::new(config)
        .and_then(|mut sim| sim.run())
        .map_err(to_py_err)?;

    let dict = PyDict::new_bound(py);
    dict.set_item("strategy", stats.strategy.name())?;
    dict.set_item("trials", stats.trials)?;
    dict.set_item("wins", stats.wins)?;
    dict.set_item("switches", stats.switches)?;
    dict.set_item("first_pick_wins", stats.first_pick_wins)?;
    dict.set_item("win_rate", stats.win_rate())?;
    Ok(dict)
}
