//! Runner configuration.
//!
//! This module defines the knobs a host can set on a run. It provides:
//! 1. **Defaults:** The standard entry-point name and validation policy.
//! 2. **Structure:** `RunnerConfig`, deserializable from JSON.
//!
//! Configuration is supplied as a dict from the Python API (serialized through JSON) or
//! built with `RunnerConfig::default()` from Rust.

use serde::Deserialize;

use crate::common::constants::ENTRY_POINT;
use crate::common::error::{CodecError, CodecResult};
use crate::common::kind::BufferSource;

/// Default configuration values.
mod defaults {
    /// Overlapping input descriptors are the caller's responsibility unless
    /// detection is requested.
    pub const REJECT_OVERLAP: bool = false;

    /// Buffers are only bounded by what the allocator can reserve.
    pub const MAX_BUFFER_LIMBS: Option<u64> = None;
}

/// Settings applied to every run of a [`SimRunner`](crate::sim::SimRunner).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Symbol resolved from the native module. Backends export `sim_run_all`.
    pub entry_point: String,
    /// Reject runs whose input descriptors share limbs.
    pub reject_overlap: bool,
    /// Upper bound on the limb count of either buffer.
    pub max_buffer_limbs: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            entry_point: ENTRY_POINT.to_string(),
            reject_overlap: defaults::REJECT_OVERLAP,
            max_buffer_limbs: defaults::MAX_BUFFER_LIMBS,
        }
    }
}

impl RunnerConfig {
    /// Parses a configuration from a JSON object. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the text is not a valid configuration object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Checks a buffer size against `max_buffer_limbs`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Allocation`] if `steps * row_width` exceeds the cap.
    pub fn check_buffer_limit(
        &self,
        buffer: BufferSource,
        steps: u64,
        row_width: u32,
    ) -> CodecResult<()> {
        let Some(cap) = self.max_buffer_limbs else {
            return Ok(());
        };
        match steps.checked_mul(u64::from(row_width)) {
            Some(len) if len <= cap => Ok(()),
            Some(len) => Err(CodecError::Allocation {
                buffer,
                steps,
                row_width,
                reason: format!("{len} limbs exceeds the configured cap of {cap}"),
            }),
            None => Err(CodecError::Allocation {
                buffer,
                steps,
                row_width,
                reason: "size overflows u64".to_string(),
            }),
        }
    }
}
