//! MTI decoding.

use bytestream::ByteReader;
use layout::{decode_header, DecodeError, LimitKind, MtiHeader, HEADER_SIZE, INSTANCE_SIZE};

use crate::advisory::Advisory;
use crate::error::{CodecError, CodecResult};
use crate::options::{DecodeOptions, Strictness};
use crate::record::InstanceRecord;
use crate::types::{Placement, Position};

/// A decoded MTI file.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The header as found in the file.
    pub header: MtiHeader,
    /// Complete records in file order, positions in file space.
    pub records: Vec<InstanceRecord>,
    /// Non-fatal conditions observed while decoding.
    pub advisories: Vec<Advisory>,
}

impl Decoded {
    /// Positions in producer space (Z-up), in file order.
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        self.records
            .iter()
            .map(InstanceRecord::source_position)
            .collect()
    }

    /// Positions exactly as stored (Y-up).
    #[must_use]
    pub fn file_positions(&self) -> Vec<Position> {
        self.records.iter().map(|record| record.position).collect()
    }

    /// Records converted back to producer placements.
    #[must_use]
    pub fn placements(&self) -> Vec<Placement> {
        self.records
            .iter()
            .map(InstanceRecord::to_placement)
            .collect()
    }

    /// Returns `true` if fewer records were read than the header declared.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.advisories.iter().any(Advisory::is_truncation)
    }
}

/// Decodes an MTI file buffer.
///
/// Truncated record data is not an error: every complete record is returned
/// and an [`Advisory::Truncated`] is attached.
pub fn decode(bytes: &[u8], options: &DecodeOptions) -> CodecResult<Decoded> {
    let limits = &options.limits;
    if bytes.len() > limits.max_file_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::FileBytes,
            limit: limits.max_file_bytes,
            actual: bytes.len(),
        }
        .into());
    }

    let header = decode_header(bytes)?;
    let mut advisories = Vec::new();
    validate_header(&header, options, &mut advisories)?;
    let records = read_records(bytes, &header, &mut advisories)?;

    tracing::debug!(
        version = header.version,
        declared = header.instance_count,
        decoded = records.len(),
        "decoded MTI file"
    );
    for advisory in &advisories {
        tracing::warn!(%advisory, "MTI decode advisory");
    }

    Ok(Decoded {
        header,
        records,
        advisories,
    })
}

/// Decodes leniently and returns the header with producer-space positions.
pub fn decode_positions(bytes: &[u8]) -> CodecResult<(MtiHeader, Vec<Position>)> {
    let decoded = decode(bytes, &DecodeOptions::default())?;
    let positions = decoded.positions();
    Ok((decoded.header, positions))
}

fn validate_header(
    header: &MtiHeader,
    options: &DecodeOptions,
    advisories: &mut Vec<Advisory>,
) -> CodecResult<()> {
    if !header.has_valid_signature() {
        let found = header.signature;
        match options.strictness {
            Strictness::Strict => return Err(CodecError::InvalidSignature { found }),
            Strictness::Lenient => advisories.push(Advisory::SignatureMismatch { found }),
        }
    }

    if !header.is_known_version() {
        let found = header.version;
        match options.strictness {
            Strictness::Strict => return Err(CodecError::UnsupportedVersion { found }),
            Strictness::Lenient => advisories.push(Advisory::UnknownVersion { found }),
        }
    }

    if header.instance_size as usize != INSTANCE_SIZE {
        return Err(CodecError::InstanceSizeMismatch {
            declared: header.instance_size,
            expected: INSTANCE_SIZE,
        });
    }

    if (header.instance_offset as usize) < HEADER_SIZE {
        return Err(CodecError::InvalidInstanceOffset {
            offset: header.instance_offset,
            header_size: HEADER_SIZE,
        });
    }

    if header.has_reserved_bits() {
        advisories.push(Advisory::ReservedFieldsSet {
            reserved: header.reserved,
        });
    }

    Ok(())
}

fn read_records(
    bytes: &[u8],
    header: &MtiHeader,
    advisories: &mut Vec<Advisory>,
) -> CodecResult<Vec<InstanceRecord>> {
    let declared = header.instance_count as usize;
    let offset = header.instance_offset as usize;
    let available = bytes.len().saturating_sub(offset) / INSTANCE_SIZE;
    let mut records = Vec::with_capacity(declared.min(available));

    // An offset past the end leaves nothing to read.
    if offset <= bytes.len() {
        let mut reader = ByteReader::new(bytes);
        reader.seek(offset)?;
        while records.len() < declared && reader.remaining() >= INSTANCE_SIZE {
            records.push(InstanceRecord::read(&mut reader)?);
        }
    }

    let len = bytes.len() as u64;
    let end = header.records_end();
    if records.len() < declared {
        advisories.push(Advisory::Truncated {
            declared: header.instance_count,
            decoded: records.len(),
        });
    } else if len > end {
        advisories.push(Advisory::TrailingBytes {
            bytes: (len - end) as usize,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;
    use layout::{Limits, MAGIC, VERSION};

    fn one_placement() -> Vec<u8> {
        encode(&[Placement::new([1.0, 2.0, 3.0], 0.0, 0.0, 0)], VERSION).unwrap()
    }

    fn set_u32(bytes: &mut [u8], offset: usize, value: u32) {
        bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    #[test]
    fn decode_single_record() {
        let bytes = one_placement();
        let decoded = decode(&bytes, &DecodeOptions::default()).unwrap();

        assert_eq!(decoded.header.signature, MAGIC);
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.file_positions(), vec![[1.0, 3.0, -2.0]]);
        assert_eq!(decoded.positions(), vec![[1.0, 2.0, 3.0]]);
        assert!(decoded.advisories.is_empty());
        assert!(!decoded.is_truncated());
    }

    #[test]
    fn header_too_small_is_format_error() {
        let err = decode(&[0u8; 16], &DecodeOptions::default()).unwrap_err();
        assert!(err.is_format_error());
        assert!(matches!(
            err,
            CodecError::Layout(DecodeError::HeaderTooSmall { actual: 16, .. })
        ));
    }

    #[test]
    fn lenient_signature_mismatch_is_advisory() {
        let mut bytes = one_placement();
        set_u32(&mut bytes, 0, 0xDEAD_BEEF);
        let decoded = decode(&bytes, &DecodeOptions::lenient()).unwrap();
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(
            decoded.advisories,
            vec![Advisory::SignatureMismatch { found: 0xDEAD_BEEF }]
        );
    }

    #[test]
    fn strict_signature_mismatch_is_error() {
        let mut bytes = one_placement();
        set_u32(&mut bytes, 0, 0xDEAD_BEEF);
        let err = decode(&bytes, &DecodeOptions::strict()).unwrap_err();
        assert_eq!(err, CodecError::InvalidSignature { found: 0xDEAD_BEEF });
    }

    #[test]
    fn unknown_version_by_strictness() {
        let mut bytes = one_placement();
        set_u32(&mut bytes, 4, 9);

        let decoded = decode(&bytes, &DecodeOptions::lenient()).unwrap();
        assert_eq!(decoded.advisories, vec![Advisory::UnknownVersion { found: 9 }]);
        assert_eq!(decoded.header.version, 9);

        let err = decode(&bytes, &DecodeOptions::strict()).unwrap_err();
        assert_eq!(err, CodecError::UnsupportedVersion { found: 9 });
    }

    #[test]
    fn instance_size_mismatch_fails_in_both_modes() {
        let mut bytes = one_placement();
        set_u32(&mut bytes, 12, 28);
        for options in [DecodeOptions::lenient(), DecodeOptions::strict()] {
            let err = decode(&bytes, &options).unwrap_err();
            assert_eq!(
                err,
                CodecError::InstanceSizeMismatch {
                    declared: 28,
                    expected: INSTANCE_SIZE
                }
            );
        }
    }

    #[test]
    fn instance_offset_inside_header_fails() {
        let mut bytes = one_placement();
        set_u32(&mut bytes, 28, 8);
        let err = decode(&bytes, &DecodeOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidInstanceOffset { offset: 8, .. }
        ));
    }

    #[test]
    fn instance_offset_past_header_is_honored() {
        let mut bytes = one_placement();
        let record = bytes.split_off(HEADER_SIZE);
        bytes.extend_from_slice(&[0xEE; 16]);
        bytes.extend_from_slice(&record);
        set_u32(&mut bytes, 28, (HEADER_SIZE + 16) as u32);

        let decoded = decode(&bytes, &DecodeOptions::default()).unwrap();
        assert_eq!(decoded.positions(), vec![[1.0, 2.0, 3.0]]);
        assert!(decoded.advisories.is_empty());
    }

    #[test]
    fn instance_offset_past_end_yields_truncation() {
        let mut bytes = one_placement();
        set_u32(&mut bytes, 28, 10_000);
        let decoded = decode(&bytes, &DecodeOptions::default()).unwrap();
        assert!(decoded.records.is_empty());
        assert_eq!(
            decoded.advisories,
            vec![Advisory::Truncated {
                declared: 1,
                decoded: 0
            }]
        );
    }

    #[test]
    fn reserved_fields_are_ignored_but_reported() {
        let mut bytes = one_placement();
        set_u32(&mut bytes, 20, 5);
        let decoded = decode(&bytes, &DecodeOptions::strict()).unwrap();
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(
            decoded.advisories,
            vec![Advisory::ReservedFieldsSet {
                reserved: [0, 5, 0]
            }]
        );
    }

    #[test]
    fn trailing_bytes_are_reported() {
        let mut bytes = one_placement();
        bytes.extend_from_slice(&[0; 5]);
        let decoded = decode(&bytes, &DecodeOptions::default()).unwrap();
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.advisories, vec![Advisory::TrailingBytes { bytes: 5 }]);
    }

    #[test]
    fn partial_last_record_is_dropped() {
        let placements = vec![Placement::new([0.5, 0.5, 0.5], 0.0, 0.0, 0); 2];
        let bytes = encode(&placements, VERSION).unwrap();
        let cut = &bytes[..bytes.len() - 1];

        let decoded = decode(cut, &DecodeOptions::default()).unwrap();
        assert_eq!(decoded.records.len(), 1);
        assert!(decoded.is_truncated());
    }

    #[test]
    fn huge_declared_count_reads_what_is_present() {
        let mut bytes = one_placement();
        set_u32(&mut bytes, 8, u32::MAX);
        let decoded = decode(&bytes, &DecodeOptions::for_testing()).unwrap();
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(
            decoded.advisories,
            vec![Advisory::Truncated {
                declared: u32::MAX,
                decoded: 1
            }]
        );
    }

    #[test]
    fn trailing_bytes_after_padded_offset() {
        let mut bytes = one_placement();
        let record = bytes.split_off(HEADER_SIZE);
        bytes.extend_from_slice(&[0; 8]);
        bytes.extend_from_slice(&record);
        bytes.extend_from_slice(&[0; 3]);
        set_u32(&mut bytes, 28, (HEADER_SIZE + 8) as u32);

        let decoded = decode(&bytes, &DecodeOptions::default()).unwrap();
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.advisories, vec![Advisory::TrailingBytes { bytes: 3 }]);
    }

    #[test]
    fn file_size_limit() {
        let bytes = vec![0u8; 64];
        let options = DecodeOptions::default().with_limits(Limits { max_file_bytes: 63 });
        let err = decode(&bytes, &options).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Layout(DecodeError::LimitsExceeded {
                kind: LimitKind::FileBytes,
                limit: 63,
                actual: 64
            })
        ));
    }

    #[test]
    fn decode_positions_matches_decode() {
        let bytes = one_placement();
        let (header, positions) = decode_positions(&bytes).unwrap();
        assert_eq!(header.instance_count, 1);
        assert_eq!(positions, vec![[1.0, 2.0, 3.0]]);
    }

    #[test]
    fn placements_carry_metadata() {
        let placement = Placement::new([1.0, 2.0, 3.0], 0.25, -0.5, 6).with_sway(17);
        let bytes = encode(&[placement], VERSION).unwrap();
        let decoded = decode(&bytes, &DecodeOptions::default()).unwrap();
        let back = decoded.placements();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].type_id, 6);
        assert_eq!(back[0].sway, 17);
        assert_eq!(back[0].position, placement.position);
    }
}
