use num_bigint::{BigInt, BigUint};
use simrunner_core::{BufferSource, InputDescriptor, OutputDescriptor, SignalWidth};

/// Installs a test-writer subscriber so `tracing` output shows on failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("simrunner_core=trace")
        .try_init();
}

/// `2^bits` as a signed value.
pub fn pow2(bits: u32) -> BigInt {
    BigInt::from(1u8) << bits
}

/// `2^bits` as an unsigned value.
pub fn upow2(bits: u32) -> BigUint {
    BigUint::from(1u8) << bits
}

pub fn width(bits: u32) -> SignalWidth {
    SignalWidth::new(bits).unwrap_or_else(|| panic!("width {bits} must be non-zero"))
}

pub fn input(offset: u64, bits: u32, values: &[u128]) -> InputDescriptor {
    InputDescriptor::new(
        offset,
        width(bits),
        values.iter().copied().map(BigInt::from).collect(),
    )
}

pub fn input_big(offset: u64, bits: u32, values: Vec<BigInt>) -> InputDescriptor {
    InputDescriptor::new(offset, width(bits), values)
}

pub fn output(source: BufferSource, offset: u64, limb_count: u32) -> OutputDescriptor<Vec<BigUint>> {
    OutputDescriptor::new(source, offset, limb_count, Vec::new())
}

pub fn biguints(values: &[u128]) -> Vec<BigUint> {
    values.iter().copied().map(BigUint::from).collect()
}
