//! Configurable limits for bounded decoding.

/// File-level limits for MTI decoding.
///
/// The file size is checked before the header is parsed. Records are only
/// read from bytes that are present, so this one limit also bounds how many
/// records a decode can allocate, whatever `instance_count` claims.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Maximum input buffer size in bytes.
    pub max_file_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // About eleven million records
            max_file_bytes: 256 * 1024 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_file_bytes: 4096,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_file_bytes: usize::MAX,
        }
    }
}
