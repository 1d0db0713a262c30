//! Symbol resolution through the platform loader.
//!
//! Two kinds of module are supported. [`RawModuleHandle`] wraps a handle that
//! some other component obtained from `dlopen`/`LoadLibrary` and passed across
//! as an integer; it is borrowed for the lookup and never closed. [`SimLibrary`]
//! owns a [`libloading::Library`] the caller opened from Rust.

use std::mem::ManuallyDrop;

use tracing::debug;

use super::{EntryPoint, NativeModule, SimRunAllFn};
use crate::common::error::{CodecError, CodecResult};

#[cfg(unix)]
use libloading::os::unix::Library as PlatformLibrary;
#[cfg(windows)]
use libloading::os::windows::Library as PlatformLibrary;

/// A native module handle owned by someone else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawModuleHandle(usize);

impl RawModuleHandle {
    /// Wraps a raw `dlopen`/`LoadLibrary` handle.
    ///
    /// # Safety
    ///
    /// `handle` must be zero or a handle returned by the platform loader that
    /// stays open for as long as this value and any entry point resolved from
    /// it are used. Symbols it exports under the entry-point name must follow
    /// the `sim_run_all` contract described on [`EntryPoint::new`].
    pub const unsafe fn from_raw(handle: usize) -> Self {
        Self(handle)
    }

    /// The wrapped handle.
    pub const fn as_raw(self) -> usize {
        self.0
    }
}

impl NativeModule for RawModuleHandle {
    fn resolve_entry(&self, symbol: &str) -> CodecResult<EntryPoint> {
        if self.0 == 0 {
            return Err(CodecError::SymbolResolution {
                symbol: symbol.to_string(),
                reason: "null module handle".to_string(),
            });
        }

        // SAFETY: `from_raw` requires a live loader handle. Wrapping it in
        // `ManuallyDrop` keeps the lookup from closing a module we do not own.
        let library = ManuallyDrop::new(unsafe { PlatformLibrary::from_raw(self.0 as _) });
        // SAFETY: the symbol is read as `SimRunAllFn`, the ABI `from_raw`
        // requires of it.
        let func = unsafe { library.get::<SimRunAllFn>(symbol.as_bytes()) }
            .map(|sym| *sym)
            .map_err(|e| resolution_error(symbol, &e))?;

        debug!(symbol, handle = self.0, "resolved native entry point");
        // SAFETY: contract forwarded from `from_raw`.
        Ok(unsafe { EntryPoint::new(func) })
    }
}

/// An opened simulation library.
///
/// Entry points resolved from it must not be called after it is dropped.
#[derive(Debug)]
pub struct SimLibrary(libloading::Library);

impl SimLibrary {
    /// Wraps an opened library.
    ///
    /// # Safety
    ///
    /// Every symbol the runner may resolve from `library`, i.e. the configured
    /// entry-point name, must have the [`SimRunAllFn`] ABI and follow the
    /// `sim_run_all` contract described on [`EntryPoint::new`].
    pub const unsafe fn new(library: libloading::Library) -> Self {
        Self(library)
    }
}

impl NativeModule for SimLibrary {
    fn resolve_entry(&self, symbol: &str) -> CodecResult<EntryPoint> {
        // SAFETY: `SimLibrary::new` requires the symbol to have this ABI.
        let func = unsafe { self.0.get::<SimRunAllFn>(symbol.as_bytes()) }
            .map(|sym| *sym)
            .map_err(|e| resolution_error(symbol, &e))?;

        debug!(symbol, "resolved native entry point");
        // SAFETY: contract forwarded from `SimLibrary::new`.
        Ok(unsafe { EntryPoint::new(func) })
    }
}

fn resolution_error(symbol: &str, err: &libloading::Error) -> CodecError {
    CodecError::SymbolResolution {
        symbol: symbol.to_string(),
        reason: err.to_string(),
    }
}
