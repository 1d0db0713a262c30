//! Input and output signal descriptors.
//!
//! Descriptors are produced upstream by whatever compiled the logic model; the
//! codec only reads them. Inputs carry one value per step, outputs carry a sink
//! that receives one reconstructed value per step.

use std::ops::Range;

use num_bigint::{BigInt, BigUint};

use crate::common::kind::BufferSource;
use crate::common::width::SignalWidth;

/// A signal packed into the input buffer before the native run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputDescriptor {
    /// Row-relative index of the signal's least-significant limb.
    pub offset: u64,
    /// Declared width of the signal.
    pub width: SignalWidth,
    /// One value per step. Values are signed so that negative host values can
    /// be reported instead of silently wrapping.
    pub values: Vec<BigInt>,
}

impl InputDescriptor {
    /// Creates an input descriptor.
    pub const fn new(offset: u64, width: SignalWidth, values: Vec<BigInt>) -> Self {
        Self {
            offset,
            width,
            values,
        }
    }

    /// Number of limbs the signal occupies in each row.
    #[inline]
    pub const fn limb_count(&self) -> u32 {
        self.width.limb_count()
    }

    /// Row-relative limb range `[offset, offset + limb_count)`.
    ///
    /// Saturates at `u64::MAX` for offsets near the top of the range, which
    /// never fit a row anyway.
    pub const fn limb_range(&self) -> Range<u64> {
        self.offset..self.offset.saturating_add(self.limb_count() as u64)
    }
}

/// A traced signal read back after the native run.
///
/// `S` is any collection that can be extended with reconstructed values, e.g.
/// `Vec<BigUint>`. Existing contents are preserved; each run appends `steps`
/// values in step order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputDescriptor<S> {
    /// Buffer the signal is read from.
    pub source: BufferSource,
    /// Row-relative index of the signal's least-significant limb.
    pub offset: u64,
    /// Number of limbs making up the signal.
    pub limb_count: u32,
    /// Destination for the per-step values.
    pub sink: S,
}

impl<S: Extend<BigUint>> OutputDescriptor<S> {
    /// Creates an output descriptor.
    pub const fn new(source: BufferSource, offset: u64, limb_count: u32, sink: S) -> Self {
        Self {
            source,
            offset,
            limb_count,
            sink,
        }
    }

    /// Row-relative limb range `[offset, offset + limb_count)`.
    pub const fn limb_range(&self) -> Range<u64> {
        self.offset..self.offset.saturating_add(self.limb_count as u64)
    }
}
