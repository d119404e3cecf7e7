//! Decode configuration.

use layout::Limits;

/// How the decoder treats a wrong signature or an unknown version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strictness {
    /// Report as an [`Advisory`](crate::Advisory) and keep reading.
    #[default]
    Lenient,
    /// Fail with a [`CodecError`](crate::CodecError).
    Strict,
}

/// Options for [`decode`](crate::decode).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeOptions {
    pub strictness: Strictness,
    pub limits: Limits,
}

impl DecodeOptions {
    /// Lenient decoding with default limits.
    #[must_use]
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Strict decoding with default limits.
    #[must_use]
    pub fn strict() -> Self {
        Self::default().with_strictness(Strictness::Strict)
    }

    /// Lenient decoding with small limits for tests.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            strictness: Strictness::Lenient,
            limits: Limits::for_testing(),
        }
    }

    /// Replaces the strictness.
    #[must_use]
    pub const fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Replaces the limits.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}
