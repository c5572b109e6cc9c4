//! Game bindings for Python.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::core::{GameError, GameRng};
use crate::game::Game;

/// Map crate errors onto Python exception types.
pub(crate) fn to_py_err(err: GameError) -> PyErr {
    match err {
        GameError::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Python wrapper for Game.
///
/// Owns its own seeded RNG so the host's reveal is reproducible.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Game,
    rng: GameRng,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for prize placement and host reveals
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let game = Game::new(&mut rng);
        Self { game, rng }
    }

    /// Select a door (0-2), clearing any previous selection.
    fn select_door(&mut self, index: usize) -> PyResult<()> {
        self.game.select_door(index).map_err(to_py_err)
    }

    /// Open a door (0-2) without applying the host rule.
    fn open_door(&mut self, index: usize) -> PyResult<()> {
        self.game.open_door(index).map_err(to_py_err)
    }

    /// Have the host open a losing, unselected door. Returns its index.
    fn open_non_winning_door(&mut self) -> PyResult<usize> {
        self.game
            .open_non_winning_door(&mut self.rng)
            .map_err(to_py_err)
    }

    /// Index of the prize door.
    #[getter]
    fn winning_door(&self) -> usize {
        self.game.winning_door()
    }

    /// Index of the selected door, or None.
    #[getter]
    fn selected_door(&self) -> Option<usize> {
        self.game.selected_door()
    }

    /// Door flags as `(is_winner, is_selected, is_open)` tuples.
    #[getter]
    fn doors(&self) -> Vec<(bool, bool, bool)> {
        self.game
            .doors()
            .iter()
            .map(|d| (d.is_winner(), d.is_selected(), d.is_open()))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("Game({})", self.game)
    }
}
