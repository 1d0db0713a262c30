//! Mock native module.
//!
//! The engine assumes one limb per input row and one limb per output row and
//! writes `input + 7` (wrapping) into each output limb.

use std::cell::Cell;

use simrunner_core::common::{CodecError, CodecResult, ENTRY_POINT};
use simrunner_core::{EntryPoint, NativeModule, SimShape};

thread_local! {
    static CALLS: Cell<usize> = const { Cell::new(0) };
}

/// Number of engine invocations on the current thread.
pub fn calls() -> usize {
    CALLS.with(Cell::get)
}

/// Shape matching the engine's one-limb rows.
pub const fn engine_shape(steps: u64) -> SimShape {
    SimShape::new(steps, 1, 1)
}

/// Module exporting [`offset_engine`] under `sim_run_all`.
#[derive(Debug, Default)]
pub struct MockModule;

impl NativeModule for MockModule {
    fn resolve_entry(&self, symbol: &str) -> CodecResult<EntryPoint> {
        if symbol != ENTRY_POINT {
            return Err(CodecError::SymbolResolution {
                symbol: symbol.to_string(),
                reason: "not exported by mock module".to_string(),
            });
        }
        // SAFETY: the engine touches `steps` limbs of each buffer, and tests
        // run it with `engine_shape`.
        Ok(unsafe { EntryPoint::new(offset_engine) })
    }
}

/// Writes `ibuf[j] + 7` into `obuf[j]` for every step `j`.
pub unsafe extern "C" fn offset_engine(steps: u64, ibuf: *mut u64, obuf: *mut u64) {
    CALLS.with(|c| c.set(c.get() + 1));
    let rows = steps as usize;
    // SAFETY: the runner allocated `rows` limbs for each pointer.
    let (input, output) = unsafe {
        (
            std::slice::from_raw_parts(ibuf, rows),
            std::slice::from_raw_parts_mut(obuf, rows),
        )
    };
    for (out, value) in output.iter_mut().zip(input) {
        *out = value.wrapping_add(7);
    }
}
