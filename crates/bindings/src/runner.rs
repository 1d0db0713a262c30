//! Simulation run entry point exposed to Python.
//!
//! `sim_pyrun` is the single call a host makes per batch of steps: it coerces
//! the descriptor sequences, runs the loaded simulation library once, and
//! extends each trace list in place with one value per step.

use num_bigint::BigUint;
use pyo3::prelude::*;
use pyo3::types::PyList;
use simrunner_core::config::RunnerConfig;
use simrunner_core::layout::{OutputDescriptor, SimShape};
use simrunner_core::native::{NativeModule, RawModuleHandle};
use simrunner_core::sim::SimRunner;

use crate::conversion::{codec_error_to_py, extract_inputs, extract_outputs, py_dict_to_config};

/// Runs a compiled simulation for `steps` steps.
///
/// The GIL is held for the whole run, including the native call, which cannot
/// be interrupted once started.
///
/// # Arguments
///
/// * `steps` - Number of simulation steps.
/// * `ibufsz` - Limbs per input buffer row.
/// * `obufsz` - Limbs per output buffer row.
/// * `data_in` - Sequence of `(offset, width, values)` per input signal.
/// * `data_out` - Sequence of `(is_output_buffer, offset, limb_count, sink)` per
///   traced signal; each `sink` list is extended in place.
/// * `dll_handle` - Handle of the already-loaded simulation library.
/// * `config` - Optional dict overriding `RunnerConfig` defaults.
///
/// # Errors
///
/// Raises `MemoryError`, `ValueError`, `IndexError`, `TypeError` or
/// `RuntimeError` depending on the failure; no sink is extended on error.
#[pyfunction]
#[pyo3(signature = (steps, ibufsz, obufsz, data_in, data_out, dll_handle, config=None))]
#[allow(clippy::too_many_arguments)]
pub fn sim_pyrun(
    py: Python<'_>,
    steps: u64,
    ibufsz: u32,
    obufsz: u32,
    data_in: &Bound<'_, PyAny>,
    data_out: &Bound<'_, PyAny>,
    dll_handle: usize,
    config: Option<&Bound<'_, PyAny>>,
) -> PyResult<()> {
    // SAFETY: the host passes the handle its loader returned for a compiled
    // simulation library, and keeps that library loaded.
    let module = unsafe { RawModuleHandle::from_raw(dll_handle) };
    run_on_module(
        py,
        &module,
        &SimShape::new(steps, ibufsz, obufsz),
        data_in,
        data_out,
        config,
    )
}

/// Runs against any native module, then extends the host sinks.
///
/// `sim_pyrun` calls this with the host's loader handle.
///
/// # Errors
///
/// As [`sim_pyrun`]. Every fallible step, including building the per-sink
/// value lists, happens before the first sink is touched.
pub fn run_on_module<M: NativeModule + ?Sized>(
    py: Python<'_>,
    module: &M,
    shape: &SimShape,
    data_in: &Bound<'_, PyAny>,
    data_out: &Bound<'_, PyAny>,
    config: Option<&Bound<'_, PyAny>>,
) -> PyResult<()> {
    let config = match config {
        Some(dict) => py_dict_to_config(py, dict)?,
        None => RunnerConfig::default(),
    };

    let inputs = extract_inputs(data_in, shape.steps).map_err(|e| codec_error_to_py(&e))?;
    let (mut outputs, sinks) = extract_outputs(data_out).map_err(|e| codec_error_to_py(&e))?;

    SimRunner::new(config)
        .run(module, shape, &inputs, &mut outputs)
        .map_err(|e| codec_error_to_py(&e))?;

    extend_sinks(py, outputs, &sinks)
}

/// Appends each staged trace to its host list.
///
/// Uses `PyList_SetSlice` on the list's end, which grows the list in place
/// and bypasses any `extend` override on a subclass.
fn extend_sinks(
    py: Python<'_>,
    outputs: Vec<OutputDescriptor<Vec<BigUint>>>,
    sinks: &[Bound<'_, PyList>],
) -> PyResult<()> {
    let staged = outputs
        .into_iter()
        .map(|output| PyList::new(py, output.sink))
        .collect::<PyResult<Vec<_>>>()?;

    for (sink, values) in sinks.iter().zip(&staged) {
        let end = sink.len();
        sink.set_slice(end, end, values.as_any())?;
    }
    Ok(())
}
