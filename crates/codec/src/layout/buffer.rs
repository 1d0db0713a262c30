//! Flat limb buffers.
//!
//! A [`LimbBuffer`] owns `steps * row_width` zero-initialised limbs. Allocation
//! is fallible: sizes are computed with checked arithmetic and reserved with
//! `try_reserve_exact`, so an oversized run is reported instead of aborting the
//! host process. Buffers are released by drop on every exit path.

use std::ops::Range;

use crate::common::error::{CodecError, CodecResult};
use crate::common::kind::{BufferSource, DescriptorKind};
use crate::config::RunnerConfig;
use crate::layout::shape::SimShape;

/// One flat, row-major limb matrix.
#[derive(Debug)]
pub struct LimbBuffer {
    source: BufferSource,
    steps: u64,
    row_width: u32,
    limbs: Vec<u64>,
}

impl LimbBuffer {
    /// Allocates a zero-filled buffer of `steps` rows of `row_width` limbs.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Allocation`] if the size overflows `usize` or the
    /// memory cannot be reserved.
    pub fn allocate(source: BufferSource, steps: u64, row_width: u32) -> CodecResult<Self> {
        let alloc_err = |reason: String| CodecError::Allocation {
            buffer: source,
            steps,
            row_width,
            reason,
        };

        let len = steps
            .checked_mul(u64::from(row_width))
            .and_then(|len| usize::try_from(len).ok())
            .ok_or_else(|| alloc_err("size overflows the address space".to_string()))?;

        let mut limbs = Vec::new();
        limbs
            .try_reserve_exact(len)
            .map_err(|e| alloc_err(e.to_string()))?;
        limbs.resize(len, 0);

        Ok(Self {
            source,
            steps,
            row_width,
            limbs,
        })
    }

    /// Buffer this instance backs.
    #[inline]
    pub const fn source(&self) -> BufferSource {
        self.source
    }

    /// Number of rows.
    #[inline]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Limbs per row.
    #[inline]
    pub const fn row_width(&self) -> u32 {
        self.row_width
    }

    /// Total number of limbs.
    #[inline]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Returns `true` if the buffer holds no limbs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Whole buffer as a flat slice.
    #[inline]
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Whole buffer as a mutable flat slice.
    #[inline]
    pub fn limbs_mut(&mut self) -> &mut [u64] {
        &mut self.limbs
    }

    /// One row as a slice.
    pub fn row(&self, step: u64) -> Option<&[u64]> {
        let width = u64::from(self.row_width);
        let start = usize::try_from(step.checked_mul(width)?).ok()?;
        let end = start.checked_add(self.row_width as usize)?;
        self.limbs.get(start..end)
    }

    /// Pointer handed to the native engine. Valid while `self` is neither
    /// moved nor dropped.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u64 {
        self.limbs.as_mut_ptr()
    }

    /// Limbs `[offset, offset + count)` of row `step`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BufferBounds`] if the range leaves the row.
    pub fn span(
        &self,
        kind: DescriptorKind,
        descriptor: usize,
        step: u64,
        offset: u64,
        count: u32,
    ) -> CodecResult<&[u64]> {
        let range = self.flat_range(kind, descriptor, step, offset, count)?;
        Ok(&self.limbs[range])
    }

    /// Mutable limbs `[offset, offset + count)` of row `step`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BufferBounds`] if the range leaves the row.
    pub fn span_mut(
        &mut self,
        kind: DescriptorKind,
        descriptor: usize,
        step: u64,
        offset: u64,
        count: u32,
    ) -> CodecResult<&mut [u64]> {
        let range = self.flat_range(kind, descriptor, step, offset, count)?;
        Ok(&mut self.limbs[range])
    }

    /// Resolves a row-relative span to flat indices, staying inside row `step`.
    ///
    /// The row end never exceeds `steps * row_width`, so a span that passes
    /// this check can neither leave the buffer nor touch another step's row.
    fn flat_range(
        &self,
        kind: DescriptorKind,
        descriptor: usize,
        step: u64,
        offset: u64,
        count: u32,
    ) -> CodecResult<Range<usize>> {
        let width = u64::from(self.row_width);
        let row_start = step.saturating_mul(width);
        let row_end = if step < self.steps {
            row_start + width
        } else {
            self.limbs.len() as u64
        };
        let start = row_start.saturating_add(offset);
        let end = start.saturating_add(u64::from(count));

        if end > row_end {
            return Err(CodecError::BufferBounds {
                kind,
                descriptor,
                buffer: self.source,
                step,
                index: start.max(row_end),
                limit: row_end,
            });
        }
        Ok(start as usize..end as usize)
    }
}

/// The input and output buffers of one run.
#[derive(Debug)]
pub struct BufferPair {
    /// Input buffer, `steps x ibufsz`.
    pub input: LimbBuffer,
    /// Output buffer, `steps x obufsz`.
    pub output: LimbBuffer,
}

impl BufferPair {
    /// Allocates both buffers for `shape`.
    ///
    /// If the output buffer cannot be allocated the input buffer is dropped
    /// before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Allocation`] if either buffer exceeds the configured
    /// cap or cannot be reserved.
    pub fn allocate(shape: &SimShape, config: &RunnerConfig) -> CodecResult<Self> {
        config.check_buffer_limit(BufferSource::InputBuffer, shape.steps, shape.ibufsz)?;
        config.check_buffer_limit(BufferSource::OutputBuffer, shape.steps, shape.obufsz)?;

        let input = LimbBuffer::allocate(BufferSource::InputBuffer, shape.steps, shape.ibufsz)?;
        let output = LimbBuffer::allocate(BufferSource::OutputBuffer, shape.steps, shape.obufsz)?;
        Ok(Self { input, output })
    }

    /// Buffer selected by `source`.
    #[inline]
    pub const fn get(&self, source: BufferSource) -> &LimbBuffer {
        match source {
            BufferSource::InputBuffer => &self.input,
            BufferSource::OutputBuffer => &self.output,
        }
    }
}
