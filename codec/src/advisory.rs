//! Non-fatal conditions reported while decoding.

use std::fmt;

use layout::{MAGIC, RESERVED_FIELDS, VERSION};

/// Something unusual about a file that did not stop it from loading.
///
/// Advisories are returned next to the decoded records and logged at
/// `warn` level. Under [`Strictness::Strict`](crate::Strictness::Strict) the
/// signature and version advisories become errors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Advisory {
    /// The signature is not [`MAGIC`].
    SignatureMismatch { found: u32 },

    /// The version is not [`VERSION`].
    UnknownVersion { found: u32 },

    /// One or more reserved header fields are non-zero.
    ReservedFieldsSet { reserved: [u32; RESERVED_FIELDS] },

    /// Fewer complete records were present than the header declared.
    Truncated { declared: u32, decoded: usize },

    /// Bytes remain after the last declared record.
    TrailingBytes { bytes: usize },
}

impl Advisory {
    /// Returns `true` for the truncated-file condition.
    #[must_use]
    pub const fn is_truncation(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignatureMismatch { found } => {
                write!(
                    f,
                    "signature 0x{found:08X} does not match 0x{MAGIC:08X}"
                )
            }
            Self::UnknownVersion { found } => {
                write!(f, "unknown version {found} (expected {VERSION})")
            }
            Self::ReservedFieldsSet { reserved } => {
                write!(f, "reserved header fields are non-zero: {reserved:?}")
            }
            Self::Truncated { declared, decoded } => {
                write!(
                    f,
                    "truncated: header declares {declared} instances, {decoded} complete"
                )
            }
            Self::TrailingBytes { bytes } => {
                write!(f, "{bytes} trailing bytes after the last instance")
            }
        }
    }
}
