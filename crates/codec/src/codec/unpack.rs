//! Output unpacking.
//!
//! Rebuilds each traced signal from `limb_count` limbs at
//! `step * row_width + offset` of its source buffer. Starting from zero, the
//! value is shifted left by 64 and or-ed with each limb from the most
//! significant down, inverting the packer's little-endian split.

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::trace;

use crate::common::constants::LIMB_BITS;
use crate::common::error::CodecResult;
use crate::common::kind::DescriptorKind;
use crate::layout::buffer::BufferPair;
use crate::layout::descriptor::OutputDescriptor;

/// Appends `steps` reconstructed values to every output descriptor's sink.
///
/// All descriptors are decoded before any sink is extended, so a failing
/// descriptor leaves every sink as it was.
///
/// # Errors
///
/// Returns [`CodecError::BufferBounds`](crate::common::error::CodecError::BufferBounds)
/// if a signal would leave its row.
pub fn unpack_outputs<S: Extend<BigUint>>(
    buffers: &BufferPair,
    outputs: &mut [OutputDescriptor<S>],
) -> CodecResult<()> {
    let decoded = outputs
        .iter()
        .enumerate()
        .map(|(index, output)| {
            let buffer = buffers.get(output.source);
            (0..buffer.steps())
                .map(|step| {
                    buffer
                        .span(
                            DescriptorKind::Output,
                            index,
                            step,
                            output.offset,
                            output.limb_count,
                        )
                        .map(read_limbs)
                })
                .collect::<CodecResult<Vec<_>>>()
        })
        .collect::<CodecResult<Vec<_>>>()?;

    for (index, (output, values)) in outputs.iter_mut().zip(decoded).enumerate() {
        trace!(
            output = index,
            source = %output.source,
            offset = output.offset,
            limb_count = output.limb_count,
            values = values.len(),
            "unpacked output"
        );
        output.sink.extend(values);
    }
    Ok(())
}

/// Reassembles a value from little-endian limbs.
pub fn read_limbs(limbs: &[u64]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &limb| (acc << LIMB_BITS) | BigUint::from(limb))
}
