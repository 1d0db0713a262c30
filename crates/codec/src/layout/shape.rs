//! Run dimensions.

use crate::common::kind::BufferSource;

/// Step count and row widths of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SimShape {
    /// Number of simulation steps (buffer rows).
    pub steps: u64,
    /// Limbs per input buffer row.
    pub ibufsz: u32,
    /// Limbs per output buffer row.
    pub obufsz: u32,
}

impl SimShape {
    /// Creates a shape.
    #[inline]
    pub const fn new(steps: u64, ibufsz: u32, obufsz: u32) -> Self {
        Self {
            steps,
            ibufsz,
            obufsz,
        }
    }

    /// Row width of the given buffer.
    #[inline]
    pub const fn row_width(&self, source: BufferSource) -> u32 {
        match source {
            BufferSource::InputBuffer => self.ibufsz,
            BufferSource::OutputBuffer => self.obufsz,
        }
    }
}
