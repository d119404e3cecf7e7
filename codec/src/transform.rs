//! Coordinate transform between producer space and file space.
//!
//! Producers work Z-up; MTI files are Y-up. The file stores `(x, z, -y)`
//! for a source point `(x, y, z)`. Both directions only swap and negate
//! components, so the round trip is bit-exact for every `f32`, including
//! signed zeros and NaN payloads.

use crate::types::Position;

/// Converts a producer-space (Z-up) position to file space (Y-up).
#[inline]
#[must_use]
pub fn to_file_space([x, y, z]: Position) -> Position {
    [x, z, -y]
}

/// Converts a file-space (Y-up) position back to producer space (Z-up).
///
/// Exact inverse of [`to_file_space`].
#[inline]
#[must_use]
pub fn from_file_space([x, y, z]: Position) -> Position {
    [x, -z, y]
}
