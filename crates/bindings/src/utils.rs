//! Utility functions exposed to Python.
//!
//! Provides the version string and logging setup for the `_simrunner` module.

use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted when `init_logging` gets no filter.
const LOG_ENV: &str = "SIMRUNNER_LOG";

/// Returns the runner version string.
///
/// # Returns
///
/// The crate version, e.g. `"0.3.0"`.
#[pyfunction]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Installs a stderr log subscriber for the codec's `tracing` events.
///
/// # Arguments
///
/// * `filter` - An `EnvFilter` directive such as `"simrunner_core=debug"`. If
///   omitted, `SIMRUNNER_LOG` is read, then `"warn"` is used.
///
/// # Returns
///
/// `true` if the subscriber was installed, `false` if one was already set.
#[pyfunction]
#[pyo3(signature = (filter=None))]
pub fn init_logging(filter: Option<&str>) -> bool {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_env(LOG_ENV).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
