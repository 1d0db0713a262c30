//! # Error Tests
//!
//! Display text and context accessors of `CodecError`.

use num_bigint::BigInt;
use simrunner_core::common::DescriptorKind;
use simrunner_core::{BufferSource, CodecError};

#[test]
fn test_value_range_display() {
    let err = CodecError::ValueRange {
        input: 3,
        step: 7,
        width: 8,
        value: BigInt::from(256),
    };
    assert_eq!(
        err.to_string(),
        "input 3 step 7: value 256 does not fit in 8 unsigned bits"
    );
    assert_eq!(err.descriptor_index(), Some(3));
    assert_eq!(err.step(), Some(7));
}

#[test]
fn test_negative_value_display() {
    let err = CodecError::ValueRange {
        input: 0,
        step: 0,
        width: 4,
        value: BigInt::from(-1),
    };
    assert!(err.to_string().contains("value -1"));
}

#[test]
fn test_buffer_bounds_display() {
    let err = CodecError::BufferBounds {
        kind: DescriptorKind::Output,
        descriptor: 2,
        buffer: BufferSource::InputBuffer,
        step: 5,
        index: 44,
        limit: 42,
    };
    assert_eq!(
        err.to_string(),
        "output 2 step 5: limb index 44 outside input buffer (limit 42)"
    );
    assert_eq!(err.descriptor_index(), Some(2));
    assert_eq!(err.step(), Some(5));
}

#[test]
fn test_symbol_resolution_display() {
    let err = CodecError::SymbolResolution {
        symbol: "sim_run_all".to_string(),
        reason: "undefined symbol".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "cannot resolve native symbol `sim_run_all`: undefined symbol"
    );
    assert_eq!(err.descriptor_index(), None);
    assert_eq!(err.step(), None);
}

#[test]
fn test_type_coercion_display() {
    let err = CodecError::TypeCoercion {
        kind: DescriptorKind::Input,
        descriptor: 1,
        field: "width",
        expected: "u32",
        reason: "-3 out of range".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "input 1: field `width` is not a valid u32: -3 out of range"
    );
    assert_eq!(err.descriptor_index(), Some(1));
}

#[test]
fn test_allocation_display() {
    let err = CodecError::Allocation {
        buffer: BufferSource::OutputBuffer,
        steps: 10,
        row_width: 4,
        reason: "out of memory".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "cannot allocate output buffer of 10 x 4 limbs: out of memory"
    );
    assert_eq!(err.descriptor_index(), None);
}

#[test]
fn test_overlap_and_count_display() {
    let overlap = CodecError::Overlap {
        buffer: BufferSource::InputBuffer,
        first: 0,
        second: 4,
    };
    assert_eq!(overlap.to_string(), "inputs 0 and 4 overlap in the input buffer");
    assert_eq!(overlap.descriptor_index(), Some(4));

    let count = CodecError::ValueCount {
        input: 2,
        expected: 10,
        found: 3,
    };
    assert_eq!(count.to_string(), "input 2: expected 10 values, found 3");
}
