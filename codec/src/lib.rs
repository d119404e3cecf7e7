//! Encoding and decoding of Meta Instancer (MTI) placement files.
//!
//! This is the main codec crate. It ties the byte layout from `layout` to
//! the producer's view of a placement: Z-up positions and radian angles.
//!
//! # Features
//!
//! - Encode placements to a complete file buffer
//! - Decode file buffers to records, positions, or placements
//! - Exact, invertible coordinate transform (Z-up producer, Y-up file)
//! - Dual-precision angle quantization (`u8` and `i16`)
//! - Configurable strictness for signature/version mismatches
//! - Truncation-tolerant decoding with structured advisories
//!
//! # Design Principles
//!
//! - **Pure functions** - Bytes in, records out; no filesystem access here.
//! - **Bounded decoding** - Header counts are checked against limits first.
//! - **Deterministic** - Same inputs produce same outputs.
//!
//! # Example
//!
//! ```
//! use codec::{decode, encode, DecodeOptions, Placement, VERSION};
//!
//! let placements = [Placement::new([1.0, 2.0, 3.0], 0.0, 0.0, 0)];
//! let bytes = encode(&placements, VERSION).unwrap();
//!
//! let decoded = decode(&bytes, &DecodeOptions::default()).unwrap();
//! assert_eq!(decoded.positions(), vec![[1.0, 2.0, 3.0]]);
//! ```

mod advisory;
mod decode;
mod encode;
mod error;
mod options;
pub mod quantize;
mod record;
pub mod transform;
mod types;

pub use advisory::Advisory;
pub use decode::{decode, decode_positions, Decoded};
pub use encode::{encode, encode_records};
pub use error::{CodecError, CodecResult};
pub use layout::{Limits, MtiHeader, HEADER_SIZE, INSTANCE_SIZE, MAGIC, VERSION};
pub use options::{DecodeOptions, Strictness};
pub use record::InstanceRecord;
pub use types::{Color, Placement, Position, DEFAULT_SWAY, DEFAULT_TYPE};
