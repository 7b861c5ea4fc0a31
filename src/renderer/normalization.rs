//! Fixed-point conversion for normalized 16-bit attributes

use crate::constants::SHORT_DENORMALIZE_SCALE;

/// Convert a float in normalized range to a de-normalized unsigned short.
///
/// Multiplies by 65536, truncates toward zero into an i32 (saturating, NaN to 0) and keeps
/// the low 16 bits. Nothing is clamped: 1.0 wraps to 0 and negative inputs keep their
/// two's complement bit pattern.
#[inline]
pub fn denormalize_float_as_short(value: f32) -> u16 {
    (value * SHORT_DENORMALIZE_SCALE) as i32 as u16
}

/// Inverse used for readback: the float a 16-bit fixed-point value stands for
#[inline]
pub fn normalize_short(bits: u16) -> f32 {
    bits as f32 / SHORT_DENORMALIZE_SCALE
}
