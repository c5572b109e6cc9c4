//! Python bindings for the monty-hall engine.
//!
//! # Quick Start
//!
//! ```python
//! import monty_hall
//!
//! game = monty_hall.Game(seed=7)
//! game.select_door(0)
//! opened = game.open_non_winning_door()
//!
//! stats = monty_hall.simulate("switch", trials=10_000, seed=1)
//! print(stats["win_rate"])
//! ```

use pyo3::prelude::*;

mod py_games;
mod py_simulation;

pub use py_games::*;
pub use py_simulation::*;

/// monty_hall: the Monty Hall puzzle and a win-rate simulator.
#[pymodule]
fn monty_hall(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    Ok(())
}
