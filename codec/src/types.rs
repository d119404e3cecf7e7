//! Core types for the codec.

/// A 3D position `[x, y, z]`.
pub type Position = [f32; 3];

/// Sway amplitude written when the producer has no opinion.
pub const DEFAULT_SWAY: u8 = 255;

/// Type tag for unclassified placements.
pub const DEFAULT_TYPE: u8 = 0;

/// Per-instance ARGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Fully opaque white, the default tint.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Creates a color from alpha, red, green, blue.
    #[must_use]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Returns the channels in file order (alpha, red, green, blue).
    #[must_use]
    pub const fn to_argb(self) -> [u8; 4] {
        [self.a, self.r, self.g, self.b]
    }

    /// Creates a color from channels in file order.
    #[must_use]
    pub const fn from_argb([a, r, g, b]: [u8; 4]) -> Self {
        Self::new(a, r, g, b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A placement as a producer sees it.
///
/// The position is in producer space (Z-up) and the orientation is in
/// radians. The codec converts it to an [`InstanceRecord`](crate::InstanceRecord)
/// on encode.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub position: Position,
    pub pitch: f32,
    pub yaw: f32,
    pub type_id: u8,
    pub sway: u8,
    pub color: Color,
}

impl Placement {
    /// Creates a placement with default sway and color.
    #[must_use]
    pub const fn new(position: Position, pitch: f32, yaw: f32, type_id: u8) -> Self {
        Self {
            position,
            pitch,
            yaw,
            type_id,
            sway: DEFAULT_SWAY,
            color: Color::WHITE,
        }
    }

    /// Sets the sway amplitude.
    #[must_use]
    pub const fn with_sway(mut self, sway: u8) -> Self {
        self.sway = sway;
        self
    }

    /// Sets the tint.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
