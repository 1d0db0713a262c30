//! Buffer and descriptor identifiers.

use std::fmt;

/// Which of the two flat limb buffers a descriptor addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferSource {
    /// The input buffer, `steps x ibufsz` limbs. Written by the packer; the
    /// native engine may rewrite parts of it to expose pass-through state.
    InputBuffer,
    /// The output buffer, `steps x obufsz` limbs. Written by the native engine.
    OutputBuffer,
}

impl BufferSource {
    /// Maps the host's `is_output_buffer` flag onto a source.
    #[inline]
    pub const fn from_is_output(is_output: bool) -> Self {
        if is_output {
            Self::OutputBuffer
        } else {
            Self::InputBuffer
        }
    }
}

impl fmt::Display for BufferSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputBuffer => write!(f, "input"),
            Self::OutputBuffer => write!(f, "output"),
        }
    }
}

/// Which caller-supplied descriptor list an index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    /// An entry of the packed inputs.
    Input,
    /// An entry of the traced outputs.
    Output,
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}
