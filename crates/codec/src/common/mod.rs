//! Common types shared across the codec.
//!
//! This module provides the building blocks used by every stage of a run:
//! 1. **Constants:** Limb geometry and the native entry-point name.
//! 2. **Identifiers:** Which buffer a descriptor addresses and which list it came from.
//! 3. **Widths:** The validated `SignalWidth` type and its limb arithmetic.
//! 4. **Error Handling:** The `CodecError` enum reported by every operation.

/// Limb geometry and entry-point constants.
pub mod constants;

/// Codec error kinds.
pub mod error;

/// Buffer and descriptor identifiers.
pub mod kind;

/// Signal bit widths.
pub mod width;

pub use constants::{ENTRY_POINT, LIMB_BITS};
pub use error::{CodecError, CodecResult};
pub use kind::{BufferSource, DescriptorKind};
pub use width::SignalWidth;
