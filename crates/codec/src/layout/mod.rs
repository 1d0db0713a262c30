//! Buffer layout and signal descriptors.
//!
//! The native engine sees two flat `u64` arrays, each a row-major matrix of
//! `steps` rows. Row `j` of a buffer with row width `w` starts at flat index
//! `j * w`; a signal occupies `limb_count` consecutive limbs at a fixed
//! row-relative offset, least-significant limb first.

/// Flat limb buffers and their allocation.
pub mod buffer;

/// Input and output signal descriptors.
pub mod descriptor;

/// Run dimensions.
pub mod shape;

pub use buffer::{BufferPair, LimbBuffer};
pub use descriptor::{InputDescriptor, OutputDescriptor};
pub use shape::SimShape;
