//! Layout constants for the positional byte format

/// 2^10, the implicit scale of a half-precision mantissa
pub const TWO_POW_10: f32 = 1024.0;

/// 2^-14, the scale of the half-precision subnormal range
pub const TWO_POW_MINUS_14: f32 = 6.103_515_625e-5;

/// Bit fields of an IEEE-754 half-precision pattern
pub mod half {
    pub const SIGN_MASK: u16 = 0x8000;
    pub const EXPONENT_MASK: u16 = 0x7C00;
    pub const MANTISSA_MASK: u16 = 0x03FF;
    pub const EXPONENT_SHIFT: u32 = 10;
    /// Exponent value reserved for infinities and NaN
    pub const EXPONENT_SPECIAL: u16 = 0x1F;
    pub const EXPONENT_BIAS: i32 = 15;
}

/// Bytes consumed by each accessor
pub mod width {
    pub const FLOAT16: usize = 2;
    pub const FLOAT32: usize = 4;
    pub const HALF_VECTOR3: usize = 3 * FLOAT16;
    /// Widest scalar any accessor reads in one step
    pub const MAX_SCALAR: usize = 8;
}

/// Null terminator of variable-length strings
pub const NUL: u8 = 0x00;
