//! Run orchestration.
//!
//! Ties validation, allocation, packing, the native call and unpacking into a
//! single synchronous run.

/// The runner.
pub mod runner;

pub use runner::{SimRunner, run_simulation};
