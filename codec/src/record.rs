//! Instance records in file space.

use bytestream::{ByteReader, ByteResult, ByteWriter};

use crate::quantize::{
    dequantize_angle_i16, dequantize_angle_u8, quantize_angle_i16, quantize_angle_u8,
};
use crate::transform::{from_file_space, to_file_space};
use crate::types::{Color, Placement, Position};

/// One fixed-width instance record, exactly as laid out in the file.
///
/// `position` is in file space (Y-up). The angle pairs are quantized codes;
/// see [`quantize`](crate::quantize) for the mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceRecord {
    pub position: Position,
    pub type_id: u8,
    pub sway: u8,
    pub pitch_u8: u8,
    pub yaw_u8: u8,
    pub pitch_i16: i16,
    pub yaw_i16: i16,
    pub color: Color,
}

impl InstanceRecord {
    /// Converts a producer placement: transforms the position and quantizes
    /// both angles at both precisions.
    #[must_use]
    pub fn from_placement(placement: &Placement) -> Self {
        Self {
            position: to_file_space(placement.position),
            type_id: placement.type_id,
            sway: placement.sway,
            pitch_u8: quantize_angle_u8(placement.pitch),
            yaw_u8: quantize_angle_u8(placement.yaw),
            pitch_i16: quantize_angle_i16(placement.pitch),
            yaw_i16: quantize_angle_i16(placement.yaw),
            color: placement.color,
        }
    }

    /// Converts back to a producer placement.
    ///
    /// Orientation comes from the `i16` pair, the finer of the two.
    #[must_use]
    pub fn to_placement(&self) -> Placement {
        Placement {
            position: self.source_position(),
            pitch: self.pitch_radians(),
            yaw: self.yaw_radians(),
            type_id: self.type_id,
            sway: self.sway,
            color: self.color,
        }
    }

    /// Position in producer space (Z-up).
    #[must_use]
    pub fn source_position(&self) -> Position {
        from_file_space(self.position)
    }

    /// Pitch in radians, from the `i16` code.
    #[must_use]
    pub fn pitch_radians(&self) -> f32 {
        dequantize_angle_i16(self.pitch_i16)
    }

    /// Yaw in radians, from the `i16` code.
    #[must_use]
    pub fn yaw_radians(&self) -> f32 {
        dequantize_angle_i16(self.yaw_i16)
    }

    /// Pitch and yaw in radians, from the coarse `u8` codes.
    #[must_use]
    pub fn coarse_angles(&self) -> (f32, f32) {
        (
            dequantize_angle_u8(self.pitch_u8),
            dequantize_angle_u8(self.yaw_u8),
        )
    }

    /// Writes the record in file order.
    pub fn write(&self, out: &mut ByteWriter) {
        for component in self.position {
            out.write_f32(component);
        }
        out.write_u8(self.type_id);
        out.write_u8(self.sway);
        out.write_u8(self.pitch_u8);
        out.write_u8(self.yaw_u8);
        out.write_i16(self.pitch_i16);
        out.write_i16(self.yaw_i16);
        out.write_bytes(&self.color.to_argb());
    }

    /// Reads one record in file order.
    pub fn read(reader: &mut ByteReader<'_>) -> ByteResult<Self> {
        let position = [reader.read_f32()?, reader.read_f32()?, reader.read_f32()?];
        Ok(Self {
            position,
            type_id: reader.read_u8()?,
            sway: reader.read_u8()?,
            pitch_u8: reader.read_u8()?,
            yaw_u8: reader.read_u8()?,
            pitch_i16: reader.read_i16()?,
            yaw_i16: reader.read_i16()?,
            color: Color::from_argb(reader.read_array()?),
        })
    }
}
