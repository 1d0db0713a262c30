//! Descriptor validation.
//!
//! Checks that every descriptor fits inside one row of its buffer and that
//! every input value fits its width. Runs before allocation; once it passes,
//! packing and unpacking cannot fail on a well-sized buffer pair.

use crate::common::error::{CodecError, CodecResult};
use crate::common::kind::{BufferSource, DescriptorKind};
use crate::layout::descriptor::{InputDescriptor, OutputDescriptor};
use crate::layout::shape::SimShape;

/// Validates input descriptors against `shape`.
///
/// # Errors
///
/// - [`CodecError::BufferBounds`] if a signal does not fit inside an input row.
/// - [`CodecError::ValueCount`] if an input has fewer values than steps.
/// - [`CodecError::ValueRange`] for the first value outside `[0, 2^width)`.
/// - [`CodecError::Overlap`] if `reject_overlap` is set and two inputs share limbs.
pub fn validate_inputs(
    shape: &SimShape,
    inputs: &[InputDescriptor],
    reject_overlap: bool,
) -> CodecResult<()> {
    let steps = usize::try_from(shape.steps).unwrap_or(usize::MAX);

    for (index, input) in inputs.iter().enumerate() {
        check_row_fit(
            DescriptorKind::Input,
            index,
            BufferSource::InputBuffer,
            shape.ibufsz,
            input.offset,
            input.limb_count(),
        )?;

        if input.values.len() < steps {
            return Err(CodecError::ValueCount {
                input: index,
                expected: shape.steps,
                found: input.values.len(),
            });
        }

        if let Some((step, value)) = input
            .values
            .iter()
            .take(steps)
            .enumerate()
            .find(|(_, value)| !input.width.admits(value))
        {
            return Err(CodecError::ValueRange {
                input: index,
                step: step as u64,
                width: input.width.bits(),
                value: value.clone(),
            });
        }
    }

    if reject_overlap {
        check_overlap(inputs)?;
    }
    Ok(())
}

/// Validates output descriptors against `shape`.
///
/// # Errors
///
/// Returns [`CodecError::BufferBounds`] if a signal does not fit inside a row
/// of its source buffer.
pub fn validate_outputs<S>(shape: &SimShape, outputs: &[OutputDescriptor<S>]) -> CodecResult<()> {
    for (index, output) in outputs.iter().enumerate() {
        check_row_fit(
            DescriptorKind::Output,
            index,
            output.source,
            shape.row_width(output.source),
            output.offset,
            output.limb_count,
        )?;
    }
    Ok(())
}

/// Requires `offset + limb_count <= row_width`, reported against step 0.
fn check_row_fit(
    kind: DescriptorKind,
    descriptor: usize,
    buffer: BufferSource,
    row_width: u32,
    offset: u64,
    limb_count: u32,
) -> CodecResult<()> {
    let limit = u64::from(row_width);
    let end = offset.saturating_add(u64::from(limb_count));
    if end > limit {
        return Err(CodecError::BufferBounds {
            kind,
            descriptor,
            buffer,
            step: 0,
            index: offset.max(limit),
            limit,
        });
    }
    Ok(())
}

/// Rejects input descriptors whose limb ranges intersect.
fn check_overlap(inputs: &[InputDescriptor]) -> CodecResult<()> {
    let mut ranges: Vec<_> = inputs
        .iter()
        .enumerate()
        .map(|(index, input)| (input.limb_range(), index))
        .collect();
    ranges.sort_by_key(|(range, index)| (range.start, *index));

    // Descriptor reaching furthest so far; a later start below its end collides.
    let mut furthest: Option<(u64, usize)> = None;
    for (range, index) in ranges {
        if let Some((end, first)) = furthest
            && range.start < end
        {
            return Err(CodecError::Overlap {
                buffer: BufferSource::InputBuffer,
                first,
                second: index,
            });
        }
        if furthest.is_none_or(|(end, _)| range.end > end) {
            furthest = Some((range.end, index));
        }
    }
    Ok(())
}
