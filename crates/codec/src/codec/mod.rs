//! Value and limb conversion.
//!
//! A run converts host values into limbs and back in three passes:
//! 1. **Validation:** Descriptor shape and every input value are checked before
//!    any buffer exists, so a rejected run never allocates.
//! 2. **Packing:** Each input value is split into little-endian limbs in its row.
//!    The packer repeats the count and range checks, so it also stands alone.
//! 3. **Unpacking:** Each traced signal is rebuilt from its limbs, most
//!    significant limb first, and appended to its sink.

/// Input packing.
pub mod pack;

/// Output unpacking.
pub mod unpack;

/// Descriptor validation.
pub mod validate;

pub use pack::{pack_inputs, write_limbs};
pub use unpack::{read_limbs, unpack_outputs};
pub use validate::{validate_inputs, validate_outputs};
