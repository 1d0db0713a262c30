//! Codec error definitions.
//!
//! Every stage of a run reports failures through [`CodecError`]. It provides:
//! 1. **Allocation failures:** Buffer sizes that overflow, exceed the configured cap, or cannot be reserved.
//! 2. **Descriptor faults:** Out-of-range values, out-of-row accesses, short value lists, overlaps.
//! 3. **Host faults:** Fields the host could not coerce and entry points that could not be resolved.
//!
//! No error is retried: a run either completes or is abandoned with both buffers dropped.

use num_bigint::BigInt;
use thiserror::Error;

use super::kind::{BufferSource, DescriptorKind};

/// Result alias used throughout the codec.
pub type CodecResult<T> = Result<T, CodecError>;

/// Failure of a single simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A flat limb buffer could not be obtained.
    #[error("cannot allocate {buffer} buffer of {steps} x {row_width} limbs: {reason}")]
    Allocation {
        /// Buffer being allocated.
        buffer: BufferSource,
        /// Requested row count.
        steps: u64,
        /// Requested row width in limbs.
        row_width: u32,
        /// Why the allocation was refused.
        reason: String,
    },

    /// An input value is negative or does not fit in its signal width.
    #[error("input {input} step {step}: value {value} does not fit in {width} unsigned bits")]
    ValueRange {
        /// Index of the offending input descriptor.
        input: usize,
        /// Step whose value was rejected.
        step: u64,
        /// Declared width of the signal.
        width: u32,
        /// The rejected value.
        value: BigInt,
    },

    /// A descriptor would read or write a limb outside its step's row.
    #[error(
        "{kind} {descriptor} step {step}: limb index {index} outside {buffer} buffer (limit {limit})"
    )]
    BufferBounds {
        /// Descriptor list the index refers to.
        kind: DescriptorKind,
        /// Index of the offending descriptor.
        descriptor: usize,
        /// Buffer being accessed.
        buffer: BufferSource,
        /// Step being accessed.
        step: u64,
        /// First flat limb index that fell out of bounds.
        index: u64,
        /// Exclusive flat index the access had to stay below.
        limit: u64,
    },

    /// The native entry point could not be resolved.
    #[error("cannot resolve native symbol `{symbol}`: {reason}")]
    SymbolResolution {
        /// Symbol that was looked up.
        symbol: String,
        /// Loader diagnostic.
        reason: String,
    },

    /// A descriptor field could not be read as the integer type the codec expects.
    #[error("{kind} {descriptor}: field `{field}` is not a valid {expected}: {reason}")]
    TypeCoercion {
        /// Descriptor list the index refers to.
        kind: DescriptorKind,
        /// Index of the offending descriptor.
        descriptor: usize,
        /// Name of the field.
        field: &'static str,
        /// Expected type, e.g. `u32`.
        expected: &'static str,
        /// Host diagnostic.
        reason: String,
    },

    /// An input supplies fewer values than there are steps.
    #[error("input {input}: expected {expected} values, found {found}")]
    ValueCount {
        /// Index of the offending input descriptor.
        input: usize,
        /// Number of steps in the run.
        expected: u64,
        /// Number of values supplied.
        found: usize,
    },

    /// Two input descriptors claim the same limb.
    #[error("inputs {first} and {second} overlap in the {buffer} buffer")]
    Overlap {
        /// Buffer in which the ranges collide.
        buffer: BufferSource,
        /// Lower-offset descriptor.
        first: usize,
        /// Descriptor whose range starts inside `first`.
        second: usize,
    },
}

impl CodecError {
    /// Returns the descriptor index the error is attributed to, if any.
    pub const fn descriptor_index(&self) -> Option<usize> {
        match self {
            Self::ValueRange { input, .. } | Self::ValueCount { input, .. } => Some(*input),
            Self::BufferBounds { descriptor, .. } | Self::TypeCoercion { descriptor, .. } => {
                Some(*descriptor)
            }
            Self::Overlap { second, .. } => Some(*second),
            Self::Allocation { .. } | Self::SymbolResolution { .. } => None,
        }
    }

    /// Returns the step the error is attributed to, if any.
    pub const fn step(&self) -> Option<u64> {
        match self {
            Self::ValueRange { step, .. } | Self::BufferBounds { step, .. } => Some(*step),
            _ => None,
        }
    }
}
