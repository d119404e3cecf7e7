//! File header types, constants, and framing.

use bytestream::{ByteReader, ByteWriter};

use crate::error::{DecodeError, LayoutResult};
use crate::instance::INSTANCE_SIZE;

/// Magic number identifying MTI files.
///
/// This value is fixed and must never change across versions.
pub const MAGIC: u32 = 0x4D54_4920; // "MTI " in ASCII, big-endian reading

/// Current file format version.
pub const VERSION: u32 = 1;

/// Number of reserved `u32` slots between `instance_size` and `instance_offset`.
pub const RESERVED_FIELDS: usize = 3;

/// Header size in bytes (32 total).
pub const HEADER_SIZE: usize = 4 + 4 + 4 + 4 + RESERVED_FIELDS * 4 + 4;

/// MTI file header.
///
/// Unlike a network packet header, the signature is kept here: decoding is
/// permissive and the codec decides what a mismatch means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MtiHeader {
    /// Magic signature; [`MAGIC`] for well-formed files.
    pub signature: u32,
    /// File format version.
    pub version: u32,
    /// Number of instance records declared.
    pub instance_count: u32,
    /// Byte width of one instance record.
    pub instance_size: u32,
    /// Unknown fields, zero on write.
    pub reserved: [u32; RESERVED_FIELDS],
    /// Absolute byte offset of the first instance record.
    pub instance_offset: u32,
}

impl MtiHeader {
    /// Creates the header written in front of `instance_count` records.
    #[must_use]
    pub const fn new(version: u32, instance_count: u32) -> Self {
        Self {
            signature: MAGIC,
            version,
            instance_count,
            instance_size: INSTANCE_SIZE as u32,
            reserved: [0; RESERVED_FIELDS],
            instance_offset: HEADER_SIZE as u32,
        }
    }

    /// Returns `true` if the signature matches [`MAGIC`].
    #[must_use]
    pub const fn has_valid_signature(&self) -> bool {
        self.signature == MAGIC
    }

    /// Returns `true` if the version is one this crate knows the layout of.
    #[must_use]
    pub const fn is_known_version(&self) -> bool {
        self.version == VERSION
    }

    /// Returns `true` if any reserved field is non-zero.
    #[must_use]
    pub fn has_reserved_bits(&self) -> bool {
        self.reserved.iter().any(|&value| value != 0)
    }

    /// Byte offset just past the last declared record.
    ///
    /// Computed in `u64`, where three `u32` factors cannot overflow.
    #[must_use]
    pub const fn records_end(&self) -> u64 {
        self.instance_count as u64 * self.instance_size as u64 + self.instance_offset as u64
    }
}

impl Default for MtiHeader {
    fn default() -> Self {
        Self::new(VERSION, 0)
    }
}

/// Writes the 32-byte header.
pub fn encode_header(header: &MtiHeader, out: &mut ByteWriter) {
    out.write_u32(header.signature);
    out.write_u32(header.version);
    out.write_u32(header.instance_count);
    out.write_u32(header.instance_size);
    for reserved in header.reserved {
        out.write_u32(reserved);
    }
    out.write_u32(header.instance_offset);
}

/// Parses the 32-byte header at the start of `buf`.
///
/// No field is validated here beyond the buffer length.
pub fn decode_header(buf: &[u8]) -> LayoutResult<MtiHeader> {
    if buf.len() < HEADER_SIZE {
        return Err(DecodeError::HeaderTooSmall {
            actual: buf.len(),
            required: HEADER_SIZE,
        });
    }

    let mut reader = ByteReader::new(&buf[..HEADER_SIZE]);
    let signature = reader.read_u32()?;
    let version = reader.read_u32()?;
    let instance_count = reader.read_u32()?;
    let instance_size = reader.read_u32()?;
    let mut reserved = [0u32; RESERVED_FIELDS];
    for slot in &mut reserved {
        *slot = reader.read_u32()?;
    }
    let instance_offset = reader.read_u32()?;

    Ok(MtiHeader {
        signature,
        version,
        instance_count,
        instance_size,
        reserved,
        instance_offset,
    })
}
