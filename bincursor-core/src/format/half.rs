//! Half-precision float codec
//!
//! A 16-bit pattern is split into a sign (bit 15), a 5-bit exponent
//! (bits 14-10) and a 10-bit mantissa (bits 9-0). Decoding evaluates the
//! IEEE-754 case split directly so every pattern maps to an exact `f32`;
//! encoding is its inverse with round-to-nearest-even.

use super::constants::half::*;
use super::constants::{TWO_POW_10, TWO_POW_MINUS_14};
use super::order::ByteOrder;
use ::half::f16;

/// 2^exp for exponents inside the normal `f32` range
fn pow2(exp: i32) -> f32 {
    f32::from_bits(((exp + 127) as u32) << 23)
}

/// Decode a half-precision bit pattern
pub fn decode_f16(bits: u16) -> f32 {
    let sign = if bits & SIGN_MASK != 0 { -1.0 } else { 1.0 };
    let exponent = (bits & EXPONENT_MASK) >> EXPONENT_SHIFT;
    let mantissa = (bits & MANTISSA_MASK) as f32;

    if exponent == 0 {
        // Subnormal: no implicit leading one
        sign * TWO_POW_MINUS_14 * (mantissa / TWO_POW_10)
    } else if exponent == EXPONENT_SPECIAL {
        if mantissa != 0.0 {
            f32::NAN
        } else {
            sign * f32::INFINITY
        }
    } else {
        sign * pow2(exponent as i32 - EXPONENT_BIAS) * (1.0 + mantissa / TWO_POW_10)
    }
}

/// Encode an `f32` as the nearest half-precision bit pattern
///
/// Ties round to even, magnitudes beyond the half range become infinity and
/// NaN stays NaN with its sign.
pub fn encode_f16(value: f32) -> u16 {
    f16::from_f32(value).to_bits()
}

/// Read a half-precision value from two bytes in the given order
pub fn read_f16(bytes: [u8; 2], order: ByteOrder) -> f32 {
    let bits = match order {
        ByteOrder::Little => u16::from_le_bytes(bytes),
        ByteOrder::Big => u16::from_be_bytes(bytes),
    };
    decode_f16(bits)
}

/// Write a value as two half-precision bytes in the given order
pub fn write_f16(value: f32, order: ByteOrder) -> [u8; 2] {
    let bits = encode_f16(value);
    match order {
        ByteOrder::Little => bits.to_le_bytes(),
        ByteOrder::Big => bits.to_be_bytes(),
    }
}
