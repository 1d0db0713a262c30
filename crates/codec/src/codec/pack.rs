//! Input packing.
//!
//! Writes each input value for each step into the input buffer as
//! `limb_count` little-endian limbs at `step * ibufsz + offset`. Limb `k` holds
//! bits `[64k, 64k + 64)` of the value; limbs above the value's magnitude are
//! written as zero.

use num_bigint::BigUint;
use tracing::trace;

use crate::common::error::{CodecError, CodecResult};
use crate::common::kind::DescriptorKind;
use crate::layout::buffer::LimbBuffer;
use crate::layout::descriptor::InputDescriptor;

/// Packs every input descriptor into `buffer`, one row per step.
///
/// Value counts and ranges are checked again here, so the packer can be used
/// without a prior [`validate_inputs`](crate::codec::validate_inputs) pass.
/// After that pass has succeeded, none of the errors below can occur.
///
/// # Errors
///
/// - [`CodecError::ValueCount`] if an input has fewer values than the buffer has rows.
/// - [`CodecError::ValueRange`] if a value is negative or at least `2^width`.
/// - [`CodecError::BufferBounds`] if a signal would leave its row.
pub fn pack_inputs(buffer: &mut LimbBuffer, inputs: &[InputDescriptor]) -> CodecResult<()> {
    let steps = buffer.steps();

    for (index, input) in inputs.iter().enumerate() {
        if (input.values.len() as u64) < steps {
            return Err(CodecError::ValueCount {
                input: index,
                expected: steps,
                found: input.values.len(),
            });
        }

        let limb_count = input.limb_count();
        for (step, value) in (0..steps).zip(&input.values) {
            if !input.width.admits(value) {
                return Err(CodecError::ValueRange {
                    input: index,
                    step,
                    width: input.width.bits(),
                    value: value.clone(),
                });
            }
            let slots =
                buffer.span_mut(DescriptorKind::Input, index, step, input.offset, limb_count)?;
            write_limbs(slots, value.magnitude());
        }

        trace!(
            input = index,
            offset = input.offset,
            width = input.width.bits(),
            limb_count,
            "packed input"
        );
    }
    Ok(())
}

/// Splits `value` into little-endian limbs filling all of `slots`.
///
/// Limbs beyond the value's magnitude are zeroed. Bits that do not fit in
/// `slots` are dropped; callers range-check first.
pub fn write_limbs(slots: &mut [u64], value: &BigUint) {
    let mut digits = value.iter_u64_digits();
    for slot in slots {
        *slot = digits.next().unwrap_or(0);
    }
}
