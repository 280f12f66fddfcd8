//! Fixed-width scalar accessors

use super::Cursor;
use bincursor_core::format::constants::width;
use bincursor_core::{read_f16, write_f16, BinError, ByteOrder, Result, Scalar};

/// Macro generating the named position/offset accessor quartet for a scalar
macro_rules! scalar_accessors {
    ($type:ty, $get:ident, $get_at:ident, $set:ident, $set_at:ident) => {
        #[doc = concat!("Read an `", stringify!($type), "` at the current position")]
        pub fn $get(&mut self) -> Result<$type> {
            self.read_with::<$type>(None, None)
        }

        #[doc = concat!("Read an `", stringify!($type), "` at `offset`")]
        pub fn $get_at(&mut self, offset: usize) -> Result<$type> {
            self.read_with::<$type>(Some(offset), None)
        }

        #[doc = concat!("Write an `", stringify!($type), "` at the current position")]
        pub fn $set(&mut self, value: $type) -> Result<()> {
            self.write_with::<$type>(value, None, None)
        }

        #[doc = concat!("Write an `", stringify!($type), "` at `offset`")]
        pub fn $set_at(&mut self, value: $type, offset: usize) -> Result<()> {
            self.write_with::<$type>(value, Some(offset), None)
        }
    };
}

impl Cursor {
    /// Read a scalar at `offset` (default: position) in `order` (default: the
    /// cursor's byte order), leaving the position just past it
    pub fn read_with<T: Scalar>(
        &mut self,
        offset: Option<usize>,
        order: Option<ByteOrder>,
    ) -> Result<T> {
        let order = order.unwrap_or(self.config.byte_order);
        let len = self.len;
        self.read_raw(offset, T::WIDTH, |bytes| {
            T::from_bytes(bytes, order).ok_or(BinError::overrun(0, T::WIDTH, len))
        })
    }

    /// Write a scalar at `offset` (default: position) in `order` (default:
    /// the cursor's byte order), leaving the position just past it
    pub fn write_with<T: Scalar>(
        &mut self,
        value: T,
        offset: Option<usize>,
        order: Option<ByteOrder>,
    ) -> Result<()> {
        let order = order.unwrap_or(self.config.byte_order);
        let mut buf = [0u8; width::MAX_SCALAR];
        let len = self.len;
        value
            .write_bytes(&mut buf, order)
            .ok_or(BinError::overrun(0, T::WIDTH, len))?;
        self.write_raw(offset, &buf[..T::WIDTH])
    }

    scalar_accessors!(i8, get_i8, get_i8_at, set_i8, set_i8_at);
    scalar_accessors!(u8, get_u8, get_u8_at, set_u8, set_u8_at);
    scalar_accessors!(i16, get_i16, get_i16_at, set_i16, set_i16_at);
    scalar_accessors!(u16, get_u16, get_u16_at, set_u16, set_u16_at);
    scalar_accessors!(i32, get_i32, get_i32_at, set_i32, set_i32_at);
    scalar_accessors!(u32, get_u32, get_u32_at, set_u32, set_u32_at);
    scalar_accessors!(f32, get_f32, get_f32_at, set_f32, set_f32_at);
    scalar_accessors!(i64, get_i64, get_i64_at, set_i64, set_i64_at);
    scalar_accessors!(u64, get_u64, get_u64_at, set_u64, set_u64_at);
    scalar_accessors!(f64, get_f64, get_f64_at, set_f64, set_f64_at);

    /// Read a half-precision float, widened to `f32`
    pub fn read_f16_with(&mut self, offset: Option<usize>, order: Option<ByteOrder>) -> Result<f32> {
        let order = order.unwrap_or(self.config.byte_order);
        self.read_raw(offset, width::FLOAT16, |bytes| {
            Ok(read_f16([bytes[0], bytes[1]], order))
        })
    }

    /// Write an `f32` as the nearest half-precision float
    pub fn write_f16_with(
        &mut self,
        value: f32,
        offset: Option<usize>,
        order: Option<ByteOrder>,
    ) -> Result<()> {
        let order = order.unwrap_or(self.config.byte_order);
        self.write_raw(offset, &write_f16(value, order))
    }

    pub fn get_f16(&mut self) -> Result<f32> {
        self.read_f16_with(None, None)
    }

    pub fn get_f16_at(&mut self, offset: usize) -> Result<f32> {
        self.read_f16_with(Some(offset), None)
    }

    pub fn set_f16(&mut self, value: f32) -> Result<()> {
        self.write_f16_with(value, None, None)
    }

    pub fn set_f16_at(&mut self, value: f32, offset: usize) -> Result<()> {
        self.write_f16_with(value, Some(offset), None)
    }
}
