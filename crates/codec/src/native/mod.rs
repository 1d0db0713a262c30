//! Native simulation entry point.
//!
//! A compiled logic model is a shared library exporting one function:
//!
//! ```c
//! void sim_run_all(uint64_t steps, uint64_t *ibuf, uint64_t *obuf);
//! ```
//!
//! The function reads all `steps * ibufsz` input limbs, writes all
//! `steps * obufsz` output limbs and may rewrite input limbs that hold
//! pass-through state. This module resolves that symbol from a module the host
//! already loaded and calls it exactly once per run.

/// Resolution from platform handles and `libloading` libraries.
pub mod library;

use std::fmt;

pub use library::{RawModuleHandle, SimLibrary};

use crate::common::error::CodecResult;
use crate::layout::buffer::BufferPair;

/// C ABI of the simulation entry point.
pub type SimRunAllFn = unsafe extern "C" fn(steps: u64, ibuf: *mut u64, obuf: *mut u64);

/// A resolved simulation entry point.
#[derive(Clone, Copy)]
pub struct EntryPoint {
    func: SimRunAllFn,
}

impl EntryPoint {
    /// Wraps a function pointer.
    ///
    /// # Safety
    ///
    /// `func` must honour the `sim_run_all` contract: given `steps` and two
    /// pointers, it accesses at most `steps * ibufsz` limbs through the first
    /// and `steps * obufsz` limbs through the second, where the row widths are
    /// the ones the descriptors were compiled against, and it does not retain
    /// either pointer after returning.
    pub const unsafe fn new(func: SimRunAllFn) -> Self {
        Self { func }
    }

    /// Runs the simulation over every row of `buffers`.
    ///
    /// Blocks until the native function returns; the call cannot be
    /// interrupted from this side.
    pub fn call(&self, buffers: &mut BufferPair) {
        let steps = buffers.input.steps();
        let ibuf = buffers.input.as_mut_ptr();
        let obuf = buffers.output.as_mut_ptr();
        // SAFETY: both buffers hold `steps * row_width` limbs and stay borrowed
        // for the whole call; `new` obliges the function to stay inside them.
        unsafe { (self.func)(steps, ibuf, obuf) }
    }
}

impl fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntryPoint")
            .field(&(self.func as *const ()))
            .finish()
    }
}

/// A loaded native module the entry point can be resolved from.
///
/// Implementations only look symbols up; they never load or unload the module.
pub trait NativeModule {
    /// Resolves `symbol` to an entry point.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SymbolResolution`](crate::common::error::CodecError::SymbolResolution)
    /// if the module does not export `symbol`.
    fn resolve_entry(&self, symbol: &str) -> CodecResult<EntryPoint>;
}

impl<M: NativeModule + ?Sized> NativeModule for &M {
    fn resolve_entry(&self, symbol: &str) -> CodecResult<EntryPoint> {
        (**self).resolve_entry(symbol)
    }
}
