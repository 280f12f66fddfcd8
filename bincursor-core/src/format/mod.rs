//! Byte-level format definitions
//!
//! Byte order, layout constants and the half-precision codec.
//! Pure functions only; nothing here touches a buffer it does not receive.

pub mod constants;
pub mod half;
pub mod order;

pub use half::{decode_f16, encode_f16, read_f16, write_f16};
pub use order::ByteOrder;
