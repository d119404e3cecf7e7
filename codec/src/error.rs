//! Error types for codec operations.

use std::fmt;

use bytestream::ByteError;
use layout::{DecodeError, MAGIC, VERSION};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during MTI encoding/decoding.
///
/// Truncated files are not errors; see
/// [`Advisory::Truncated`](crate::Advisory::Truncated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Layout framing error (header too small, limits exceeded).
    Layout(DecodeError),

    /// Signature mismatch under strict decoding.
    InvalidSignature { found: u32 },

    /// Unknown version under strict decoding.
    UnsupportedVersion { found: u32 },

    /// Declared record width differs from this codec's fixed width.
    InstanceSizeMismatch { declared: u32, expected: usize },

    /// Declared record offset points inside the header.
    InvalidInstanceOffset { offset: u32, header_size: usize },

    /// More placements than a `u32` instance count can declare.
    TooManyInstances { count: usize },
}

impl CodecError {
    /// Returns `true` if the input is not a readable MTI file, as opposed
    /// to one that merely exceeded configured limits.
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::Layout(DecodeError::HeaderTooSmall { .. })
                | Self::InvalidSignature { .. }
                | Self::UnsupportedVersion { .. }
                | Self::InstanceSizeMismatch { .. }
                | Self::InvalidInstanceOffset { .. }
        )
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "layout error: {e}"),
            Self::InvalidSignature { found } => {
                write!(
                    f,
                    "invalid signature: 0x{found:08X}, expected 0x{MAGIC:08X}"
                )
            }
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported version: {found}, expected {VERSION}")
            }
            Self::InstanceSizeMismatch { declared, expected } => {
                write!(
                    f,
                    "instance size mismatch: header declares {declared} bytes, codec uses {expected}"
                )
            }
            Self::InvalidInstanceOffset {
                offset,
                header_size,
            } => {
                write!(
                    f,
                    "instance offset {offset} overlaps the {header_size} byte header"
                )
            }
            Self::TooManyInstances { count } => {
                write!(f, "too many instances: {count} > {}", u32::MAX)
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DecodeError> for CodecError {
    fn from(err: DecodeError) -> Self {
        Self::Layout(err)
    }
}

impl From<ByteError> for CodecError {
    fn from(err: ByteError) -> Self {
        Self::Layout(DecodeError::Bytes(err))
    }
}
