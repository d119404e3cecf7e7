//! Byte layout, header framing, and decode limits for the MTI format.
//!
//! This crate is the single source of truth for the Meta Instancer file
//! layout: the 32-byte header, the 24-byte instance record, the magic
//! signature, and the current version. It does not know about coordinate
//! conventions or angle quantization, only where the bytes go.
//!
//! # Design Principles
//!
//! - **Stable file format** - Offsets and widths never change within a version.
//! - **Little-endian everywhere** - Matches the native x86 layout of existing files.
//! - **Bounded decoding** - Counts are validated against [`Limits`] before iteration.
//! - **Framing, not policy** - Signature and version checks belong to the codec.
//!
//! # Header (32 bytes)
//!
//! | Offset | Field             | Width |
//! |--------|-------------------|-------|
//! | 0      | signature         | u32   |
//! | 4      | version           | u32   |
//! | 8      | instance_count    | u32   |
//! | 12     | instance_size     | u32   |
//! | 16     | reserved[3]       | u32×3 |
//! | 28     | instance_offset   | u32   |
//!
//! See [`instance`] for the record layout.

mod error;
mod header;
pub mod instance;
mod limits;

pub use error::{DecodeError, LayoutResult, LimitKind};
pub use header::{
    decode_header, encode_header, MtiHeader, HEADER_SIZE, MAGIC, RESERVED_FIELDS, VERSION,
};
pub use instance::INSTANCE_SIZE;
pub use limits::Limits;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = MAGIC;
        let _ = VERSION;
        let _ = HEADER_SIZE;
        let _ = INSTANCE_SIZE;
        let _ = MtiHeader::new(VERSION, 0);
        let _ = Limits::default();

        // Error types
        let _: LayoutResult<()> = Ok(());
    }

    #[test]
    fn header_size_constant_correct() {
        assert_eq!(
            HEADER_SIZE,
            size_of::<u32>() // signature
                + size_of::<u32>() // version
                + size_of::<u32>() // instance_count
                + size_of::<u32>() // instance_size
                + RESERVED_FIELDS * size_of::<u32>() // reserved
                + size_of::<u32>() // instance_offset
        );
    }

    #[test]
    fn limits_default_is_reasonable() {
        let limits = Limits::default();
        assert!(
            limits.max_file_bytes >= HEADER_SIZE + (1 << 23) * INSTANCE_SIZE,
            "should allow at least eight million instances"
        );
    }

    #[test]
    fn header_and_limits_integration() {
        let header = MtiHeader::new(VERSION, 3);
        let end = header.records_end();
        assert_eq!(end, (HEADER_SIZE + 3 * INSTANCE_SIZE) as u64);
        assert!(end <= Limits::for_testing().max_file_bytes as u64);
    }
}
