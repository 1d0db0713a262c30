//! # Signal Width Tests
//!
//! Limb counts, value bounds and range admission for `SignalWidth`.

use num_bigint::BigInt;
use rstest::rstest;
use simrunner_core::SignalWidth;

use crate::common::harness::{pow2, upow2, width};

#[test]
fn test_zero_width_rejected() {
    assert_eq!(SignalWidth::new(0), None);
    assert_eq!(SignalWidth::try_from(0), Err(0));
}

#[rstest]
#[case(1, 1)]
#[case(63, 1)]
#[case(64, 1)]
#[case(65, 2)]
#[case(70, 2)]
#[case(128, 2)]
#[case(129, 3)]
#[case(640, 10)]
#[case(641, 11)]
fn test_limb_count(#[case] bits: u32, #[case] limbs: u32) {
    assert_eq!(width(bits).limb_count(), limbs);
}

#[test]
fn test_limb_count_boundary_for_every_multiple() {
    for k in 1..=16 {
        assert_eq!(width(64 * k).limb_count(), k);
        assert_eq!(width(64 * k + 1).limb_count(), k + 1);
    }
}

#[test]
fn test_value_bound() {
    assert_eq!(width(1).value_bound(), upow2(1));
    assert_eq!(width(64).value_bound(), upow2(64));
    assert_eq!(width(70).value_bound(), upow2(70));
}

#[rstest]
#[case(8, 0, true)]
#[case(8, 255, true)]
#[case(8, 256, false)]
#[case(8, -1, false)]
#[case(1, 1, true)]
#[case(1, 2, false)]
fn test_admits_small(#[case] bits: u32, #[case] value: i64, #[case] ok: bool) {
    assert_eq!(width(bits).admits(&BigInt::from(value)), ok);
}

#[test]
fn test_admits_wide_edges() {
    let w = width(70);
    assert!(w.admits(&(pow2(70) - 1)));
    assert!(!w.admits(&pow2(70)));
    assert!(w.admits(&pow2(69)));
    assert!(!w.admits(&-pow2(69)));
}

#[test]
fn test_display() {
    assert_eq!(width(70).to_string(), "70");
}
