//! Python bindings for the simrunner limb codec.
//!
//! This crate exposes the codec to Python via PyO3. It provides:
//! 1. **Runner:** `sim_pyrun`, which packs inputs, calls a loaded simulation library and extends trace lists.
//! 2. **Conversion:** Python sequences and dicts to descriptors and `RunnerConfig`, errors to Python exceptions.
//! 3. **Utilities:** Version string and logging setup.

use pyo3::prelude::*;

/// Python objects to core types and core errors to Python exceptions.
pub mod conversion;
/// `sim_pyrun` entry point.
pub mod runner;
/// Utility functions (version, logging).
pub mod utils;

/// Registers all runner functions onto the given Python module.
///
/// Called from the `#[pymodule]` entry point to expose `sim_pyrun`, `version`
/// and `init_logging`.
///
/// # Arguments
///
/// * `m` - The Python module to register functions on.
///
/// # Errors
///
/// Returns a `PyErr` if a function cannot be added to the module.
pub fn register_simrunner_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(runner::sim_pyrun, m)?)?;
    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_logging, m)?)?;
    Ok(())
}

#[pymodule]
#[pyo3(name = "_simrunner")]
fn simrunner(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_simrunner_module(m)?;
    Ok(())
}
