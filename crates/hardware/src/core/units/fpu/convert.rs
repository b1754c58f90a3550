//! Format conversions (`CVTF2D`, `CVTF2I`, `CVTD2F`, `CVTD2I`, `CVTI2F`, `CVTI2D`).
//!
//! Float-to-integer conversions truncate toward zero and saturate; NaN
//! converts to zero.

use crate::core::pipeline::signals::Precision;

/// Converts `bits` from format `from` into format `to`.
pub fn execute(from: Precision, to: Precision, bits: u64) -> u64 {
    let value = match from {
        Precision::Single => f64::from(f32::from_bits(bits as u32)),
        Precision::Double => f64::from_bits(bits),
        Precision::Int => f64::from(bits as u32 as i32),
        Precision::UInt => f64::from(bits as u32),
    };
    match to {
        Precision::Single => u64::from((value as f32).to_bits()),
        Precision::Double => value.to_bits(),
        Precision::Int => u64::from(value as i32 as u32),
        Precision::UInt => u64::from(value as u32),
    }
}
