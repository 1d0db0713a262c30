//! Simulation runner.
//!
//! One run proceeds strictly in order:
//! 1. **Validate:** descriptor shape, value counts and value ranges.
//! 2. **Resolve:** look up the entry point in the native module.
//! 3. **Allocate:** both limb buffers, zero-filled.
//! 4. **Pack:** inputs into the input buffer.
//! 5. **Invoke:** the native function, exactly once.
//! 6. **Unpack:** traced signals from either buffer into their sinks.
//!
//! The buffers are dropped when the run returns, whether it succeeded or not.

use num_bigint::BigUint;
use tracing::{debug, warn};

use crate::codec::{pack_inputs, unpack_outputs, validate_inputs, validate_outputs};
use crate::common::error::CodecResult;
use crate::config::RunnerConfig;
use crate::layout::buffer::BufferPair;
use crate::layout::descriptor::{InputDescriptor, OutputDescriptor};
use crate::layout::shape::SimShape;
use crate::native::NativeModule;

/// Executes simulation runs under a fixed configuration.
///
/// The runner holds no per-run state, so one instance can serve any number of
/// runs, including concurrent ones on different threads.
#[derive(Clone, Debug, Default)]
pub struct SimRunner {
    config: RunnerConfig,
}

impl SimRunner {
    /// Creates a runner with the given configuration.
    pub const fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Runs the native simulation once over `shape.steps` steps.
    ///
    /// On success every output sink has been extended by `shape.steps` values.
    /// On failure no sink has been touched.
    ///
    /// # Errors
    ///
    /// Any [`CodecError`](crate::common::error::CodecError); see the module
    /// documentation for the order in which checks happen.
    pub fn run<M, S>(
        &self,
        module: &M,
        shape: &SimShape,
        inputs: &[InputDescriptor],
        outputs: &mut [OutputDescriptor<S>],
    ) -> CodecResult<()>
    where
        M: NativeModule + ?Sized,
        S: Extend<BigUint>,
    {
        debug!(
            steps = shape.steps,
            ibufsz = shape.ibufsz,
            obufsz = shape.obufsz,
            inputs = inputs.len(),
            outputs = outputs.len(),
            "starting simulation run"
        );

        self.execute(module, shape, inputs, outputs)
            .inspect_err(|err| warn!(%err, "simulation run rejected"))
    }

    fn execute<M, S>(
        &self,
        module: &M,
        shape: &SimShape,
        inputs: &[InputDescriptor],
        outputs: &mut [OutputDescriptor<S>],
    ) -> CodecResult<()>
    where
        M: NativeModule + ?Sized,
        S: Extend<BigUint>,
    {
        validate_inputs(shape, inputs, self.config.reject_overlap)?;
        validate_outputs(shape, outputs)?;

        let entry = module.resolve_entry(&self.config.entry_point)?;

        let mut buffers = BufferPair::allocate(shape, &self.config)?;
        pack_inputs(&mut buffers.input, inputs)?;

        entry.call(&mut buffers);
        debug!(steps = shape.steps, "native simulation returned");

        unpack_outputs(&buffers, outputs)
    }
}

/// Runs a simulation with the default configuration.
///
/// # Errors
///
/// See [`SimRunner::run`].
pub fn run_simulation<M, S>(
    module: &M,
    shape: &SimShape,
    inputs: &[InputDescriptor],
    outputs: &mut [OutputDescriptor<S>],
) -> CodecResult<()>
where
    M: NativeModule + ?Sized,
    S: Extend<BigUint>,
{
    SimRunner::default().run(module, shape, inputs, outputs)
}
