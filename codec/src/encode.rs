//! MTI encoding.

use bytestream::ByteWriter;
use layout::{encode_header, MtiHeader, HEADER_SIZE, INSTANCE_SIZE};

use crate::error::{CodecError, CodecResult};
use crate::record::InstanceRecord;
use crate::types::Placement;

/// Encodes producer placements into a complete MTI file buffer.
///
/// Each placement is moved to file space and its angles quantized (see
/// [`InstanceRecord::from_placement`]). Records are written in input order.
/// An empty slice produces a header-only file; rejecting "nothing to export"
/// is the producer's call.
pub fn encode(placements: &[Placement], version: u32) -> CodecResult<Vec<u8>> {
    let mut writer = begin_file(version, placements.len())?;
    for placement in placements {
        InstanceRecord::from_placement(placement).write(&mut writer);
    }
    Ok(writer.finish())
}

/// Encodes records that are already in file space, unchanged.
pub fn encode_records(records: &[InstanceRecord], version: u32) -> CodecResult<Vec<u8>> {
    let mut writer = begin_file(version, records.len())?;
    for record in records {
        record.write(&mut writer);
    }
    Ok(writer.finish())
}

fn begin_file(version: u32, count: usize) -> CodecResult<ByteWriter> {
    let instance_count =
        u32::try_from(count).map_err(|_| CodecError::TooManyInstances { count })?;
    let header = MtiHeader::new(version, instance_count);

    let capacity = count.saturating_mul(INSTANCE_SIZE).saturating_add(HEADER_SIZE);
    let mut writer = ByteWriter::with_capacity(capacity);
    encode_header(&header, &mut writer);

    tracing::debug!(version, instance_count, bytes = capacity, "encoding MTI file");
    Ok(writer)
}
