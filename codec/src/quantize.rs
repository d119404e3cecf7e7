//! Angle quantization.
//!
//! Orientation angles are stored twice: a coarse `u8` code and a fine `i16`
//! code. Both codecs treat an angle as a point on the circle, so the input is
//! first wrapped onto `[-π, π)`:
//!
//! - `u8`:  `q = round((a + π) mod 2π / 2π · 256) mod 256`, decoded as `q · 2π/256 − π`.
//! - `i16`: `q = (round((a + π) mod 2π / 2π · 65536) mod 65536) − 32768`, decoded as `q · π/32768`.
//!
//! Decoding a code and quantizing it again yields the same code. The math runs
//! in `f64` so this holds for every one of the 256 and 65536 codes.

use std::f64::consts::{PI, TAU};

/// Angular width of one `u8` code, in radians.
pub const U8_STEP: f32 = (TAU / 256.0) as f32;

/// Angular width of one `i16` code, in radians.
pub const I16_STEP: f32 = (TAU / 65536.0) as f32;

/// Fraction of a full turn past `-π`, in `[0, 1]`.
///
/// Non-finite angles map to `-π`.
fn turns(angle: f32) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    (f64::from(angle) + PI).rem_euclid(TAU) / TAU
}

/// Quantizes a radian angle to a `u8` code.
#[must_use]
pub fn quantize_angle_u8(angle: f32) -> u8 {
    // 1.0 turns rounds to 256, which is the same point as code 0.
    ((turns(angle) * 256.0).round() as u32 % 256) as u8
}

/// Decodes a `u8` code to a radian angle in `[-π, π)`.
#[must_use]
pub fn dequantize_angle_u8(code: u8) -> f32 {
    (f64::from(code) * (TAU / 256.0) - PI) as f32
}

/// Quantizes a radian angle to an `i16` code.
#[must_use]
pub fn quantize_angle_i16(angle: f32) -> i16 {
    let code = (turns(angle) * 65536.0).round() as u32 % 65536;
    (code as i32 - 32768) as i16
}

/// Decodes an `i16` code to a radian angle in `[-π, π)`.
#[must_use]
pub fn dequantize_angle_i16(code: i16) -> f32 {
    (f64::from(code) * (PI / 32768.0)) as f32
}

/// Shortest distance between two angles on the circle, in radians.
#[must_use]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let diff = (f64::from(a) - f64::from(b)).rem_euclid(TAU);
    diff.min(TAU - diff) as f32
}
