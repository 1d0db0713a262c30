//! Limb codec and runner for natively compiled logic simulations.
//!
//! A host describes every logic signal as an unsigned integer of arbitrary
//! width; a compiled simulation works on flat arrays of 64-bit limbs. This
//! crate converts between the two, bit for bit:
//! 1. **Layout:** Descriptors, run shape, and the two row-major limb buffers.
//! 2. **Codec:** Validation, little-endian packing of inputs, unpacking of traced signals.
//! 3. **Native:** Resolution and invocation of the `sim_run_all` entry point.
//! 4. **Simulation:** The runner that drives one run from validation to unpacking.

/// Value/limb conversion (validate, pack, unpack).
pub mod codec;
/// Common types (constants, widths, identifiers, errors).
pub mod common;
/// Runner configuration.
pub mod config;
/// Buffer layout and descriptors.
pub mod layout;
/// Native entry-point resolution and invocation.
pub mod native;
/// Run orchestration.
pub mod sim;

/// Error type returned by every fallible operation.
pub use crate::common::{BufferSource, CodecError, CodecResult, SignalWidth};
/// Runner configuration; use `RunnerConfig::default()` or deserialize from JSON.
pub use crate::config::RunnerConfig;
/// Descriptors and run shape.
pub use crate::layout::{InputDescriptor, OutputDescriptor, SimShape};
/// Native module abstraction.
pub use crate::native::{EntryPoint, NativeModule, RawModuleHandle, SimLibrary, SimRunAllFn};
/// Runner; construct with `SimRunner::new` or call `run_simulation`.
pub use crate::sim::{SimRunner, run_simulation};
