//! Signal bit widths.
//!
//! A [`SignalWidth`] is the declared width `w` of a logic signal. It fixes how
//! many limbs the signal occupies in a buffer row and the exclusive upper bound
//! `2^w` for the unsigned values the signal may carry.

use std::fmt;
use std::num::NonZeroU32;

use num_bigint::{BigInt, BigUint, Sign};

use super::constants::LIMB_BITS;

/// Bit width of a signal, always at least one bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignalWidth(NonZeroU32);

impl SignalWidth {
    /// Creates a width, returning `None` for zero.
    #[inline]
    pub const fn new(bits: u32) -> Option<Self> {
        match NonZeroU32::new(bits) {
            Some(bits) => Some(Self(bits)),
            None => None,
        }
    }

    /// Width in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0.get()
    }

    /// Number of 64-bit limbs needed to hold the signal, `ceil(w / 64)`.
    #[inline]
    pub const fn limb_count(self) -> u32 {
        self.0.get().div_ceil(LIMB_BITS)
    }

    /// Exclusive upper bound `2^w` for values of this width.
    pub fn value_bound(self) -> BigUint {
        BigUint::from(1u8) << self.bits()
    }

    /// Returns `true` if `0 <= value < 2^w`.
    pub fn admits(self, value: &BigInt) -> bool {
        value.sign() != Sign::Minus && value.bits() <= u64::from(self.bits())
    }
}

impl fmt::Display for SignalWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl TryFrom<u32> for SignalWidth {
    type Error = u32;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::new(bits).ok_or(bits)
    }
}
