//! Instance record layout.
//!
//! Every record is exactly [`INSTANCE_SIZE`] bytes, little-endian, in this
//! order:
//!
//! | Offset | Field       | Type |
//! |--------|-------------|------|
//! | 0      | position.x  | f32  |
//! | 4      | position.y  | f32  |
//! | 8      | position.z  | f32  |
//! | 12     | type        | u8   |
//! | 13     | sway        | u8   |
//! | 14     | pitch (u8)  | u8   |
//! | 15     | yaw (u8)    | u8   |
//! | 16     | pitch (i16) | i16  |
//! | 18     | yaw (i16)   | i16  |
//! | 20     | alpha       | u8   |
//! | 21     | red         | u8   |
//! | 22     | green       | u8   |
//! | 23     | blue        | u8   |
//!
//! The `u8` angle pair is the orientation after the reference transform and
//! the `i16` pair the orientation before it, at higher precision.

/// Byte offset of `position.x`.
pub const POSITION_OFFSET: usize = 0;
/// Byte offset of the type tag.
pub const TYPE_OFFSET: usize = 12;
/// Byte offset of the sway amplitude.
pub const SWAY_OFFSET: usize = 13;
/// Byte offset of the `u8` pitch.
pub const PITCH_U8_OFFSET: usize = 14;
/// Byte offset of the `u8` yaw.
pub const YAW_U8_OFFSET: usize = 15;
/// Byte offset of the `i16` pitch.
pub const PITCH_I16_OFFSET: usize = 16;
/// Byte offset of the `i16` yaw.
pub const YAW_I16_OFFSET: usize = 18;
/// Byte offset of the ARGB color.
pub const COLOR_OFFSET: usize = 20;

/// Instance record size in bytes (24 total).
pub const INSTANCE_SIZE: usize = 3 * 4 + 4 + 2 * 2 + 4;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn instance_size_is_correct() {
        assert_eq!(INSTANCE_SIZE, 24);
        assert_eq!(
            INSTANCE_SIZE,
            3 * size_of::<f32>() // position
                + size_of::<u8>() // type
                + size_of::<u8>() // sway
                + 2 * size_of::<u8>() // pitch/yaw u8
                + 2 * size_of::<i16>() // pitch/yaw i16
                + 4 * size_of::<u8>() // argb
        );
    }

    #[test]
    fn offsets_are_contiguous() {
        assert_eq!(TYPE_OFFSET, POSITION_OFFSET + 3 * size_of::<f32>());
        assert_eq!(SWAY_OFFSET, TYPE_OFFSET + 1);
        assert_eq!(PITCH_U8_OFFSET, SWAY_OFFSET + 1);
        assert_eq!(YAW_U8_OFFSET, PITCH_U8_OFFSET + 1);
        assert_eq!(PITCH_I16_OFFSET, YAW_U8_OFFSET + 1);
        assert_eq!(YAW_I16_OFFSET, PITCH_I16_OFFSET + size_of::<i16>());
        assert_eq!(COLOR_OFFSET, YAW_I16_OFFSET + size_of::<i16>());
        assert_eq!(INSTANCE_SIZE, COLOR_OFFSET + 4);
    }

    #[test]
    fn i16_fields_are_two_byte_aligned() {
        assert_eq!(PITCH_I16_OFFSET % 2, 0);
        assert_eq!(YAW_I16_OFFSET % 2, 0);
    }
}
