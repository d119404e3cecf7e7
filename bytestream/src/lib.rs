//! Bounded little-endian byte cursor for the MTI codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for fixed-width,
//! byte-aligned encoding and decoding. Every multi-byte value is little-endian.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads and seeks are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about headers or instances.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u32(0x4D54_4920);
//! writer.write_f32(1.5);
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u32().unwrap(), 0x4D54_4920);
//! assert_eq!(reader.read_f32().unwrap(), 1.5);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ByteError, ByteResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;
