//! Fixed-width scalar codec trait
//!
//! Defines which plain values a cursor can read and write in one step, and
//! how their bytes are laid out for a given byte order.

use crate::format::{constants::width::MAX_SCALAR, ByteOrder};

/// Trait for plain values stored as `WIDTH` raw bytes
///
/// Implementors are `bytemuck::Pod`, so their native representation is the
/// byte sequence itself; the provided methods only reverse it when the
/// requested order differs from the target's.
pub trait Scalar: bytemuck::Pod + PartialEq + core::fmt::Debug {
    /// Number of bytes consumed per access
    const WIDTH: usize = core::mem::size_of::<Self>();

    /// Decode from the first `WIDTH` bytes of `bytes`
    ///
    /// Returns `None` if fewer than `WIDTH` bytes are supplied.
    fn from_bytes(bytes: &[u8], order: ByteOrder) -> Option<Self> {
        let src = bytes.get(..Self::WIDTH)?;
        let mut buf = [0u8; MAX_SCALAR];
        let buf = &mut buf[..Self::WIDTH];
        buf.copy_from_slice(src);
        if !order.is_native() {
            buf.reverse();
        }
        Some(bytemuck::pod_read_unaligned(buf))
    }

    /// Encode into the first `WIDTH` bytes of `out`
    ///
    /// Returns `None`, leaving `out` untouched, if it is too short.
    fn write_bytes(self, out: &mut [u8], order: ByteOrder) -> Option<()> {
        let dst = out.get_mut(..Self::WIDTH)?;
        dst.copy_from_slice(bytemuck::bytes_of(&self));
        if !order.is_native() {
            dst.reverse();
        }
        Some(())
    }
}

macro_rules! impl_scalar {
    ($($type:ty),*) => {
        $(impl Scalar for $type {})*
    };
}

impl_scalar!(i8, u8, i16, u16, i32, u32, f32, i64, u64, f64);
