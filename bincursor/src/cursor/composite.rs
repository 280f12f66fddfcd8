//! Composite accessors built from chained scalar reads
//!
//! A composite starts at the given offset (or the position) and each
//! following component continues from where the previous one left the
//! cursor. The whole span is checked first so a composite never lands
//! half-written.

use super::Cursor;
use bincursor_core::format::constants::width;
use bincursor_core::{ByteOrder, Result};

pub type Vector2 = [f32; 2];
pub type Vector3 = [f32; 3];
pub type Vector4 = [f32; 4];
/// Four `f32` components, same layout as [`Vector4`]
pub type Quaternion = [f32; 4];
/// Three half-precision components widened to `f32`
pub type HalfVector3 = [f32; 3];

impl Cursor {
    /// Read `N` consecutive `f32` components
    pub fn read_vector_with<const N: usize>(
        &mut self,
        offset: Option<usize>,
        order: Option<ByteOrder>,
    ) -> Result<[f32; N]> {
        self.span(offset, N * width::FLOAT32)?;
        let mut out = [0f32; N];
        let mut at = offset;
        for component in out.iter_mut() {
            *component = self.read_with::<f32>(at.take(), order)?;
        }
        Ok(out)
    }

    /// Write `N` consecutive `f32` components
    pub fn write_vector_with<const N: usize>(
        &mut self,
        value: [f32; N],
        offset: Option<usize>,
        order: Option<ByteOrder>,
    ) -> Result<()> {
        self.span(offset, N * width::FLOAT32)?;
        let mut at = offset;
        for component in value {
            self.write_with::<f32>(component, at.take(), order)?;
        }
        Ok(())
    }

    /// Read three consecutive half-precision components
    pub fn read_half_vector3_with(
        &mut self,
        offset: Option<usize>,
        order: Option<ByteOrder>,
    ) -> Result<HalfVector3> {
        self.span(offset, width::HALF_VECTOR3)?;
        let mut out = [0f32; 3];
        let mut at = offset;
        for component in out.iter_mut() {
            *component = self.read_f16_with(at.take(), order)?;
        }
        Ok(out)
    }

    pub fn write_half_vector3_with(
        &mut self,
        value: HalfVector3,
        offset: Option<usize>,
        order: Option<ByteOrder>,
    ) -> Result<()> {
        self.span(offset, width::HALF_VECTOR3)?;
        let mut at = offset;
        for component in value {
            self.write_f16_with(component, at.take(), order)?;
        }
        Ok(())
    }

    pub fn get_vector2(&mut self) -> Result<Vector2> {
        self.read_vector_with(None, None)
    }

    pub fn get_vector2_at(&mut self, offset: usize) -> Result<Vector2> {
        self.read_vector_with(Some(offset), None)
    }

    pub fn get_vector3(&mut self) -> Result<Vector3> {
        self.read_vector_with(None, None)
    }

    pub fn get_vector3_at(&mut self, offset: usize) -> Result<Vector3> {
        self.read_vector_with(Some(offset), None)
    }

    pub fn get_vector4(&mut self) -> Result<Vector4> {
        self.read_vector_with(None, None)
    }

    pub fn get_vector4_at(&mut self, offset: usize) -> Result<Vector4> {
        self.read_vector_with(Some(offset), None)
    }

    /// Read a quaternion as `[x, y, z, w]`
    pub fn get_quaternion(&mut self) -> Result<Quaternion> {
        self.read_vector_with(None, None)
    }

    pub fn get_quaternion_at(&mut self, offset: usize) -> Result<Quaternion> {
        self.read_vector_with(Some(offset), None)
    }

    pub fn get_half_vector3(&mut self) -> Result<HalfVector3> {
        self.read_half_vector3_with(None, None)
    }

    pub fn get_half_vector3_at(&mut self, offset: usize) -> Result<HalfVector3> {
        self.read_half_vector3_with(Some(offset), None)
    }

    pub fn set_vector2(&mut self, value: Vector2) -> Result<()> {
        self.write_vector_with(value, None, None)
    }

    pub fn set_vector2_at(&mut self, value: Vector2, offset: usize) -> Result<()> {
        self.write_vector_with(value, Some(offset), None)
    }

    pub fn set_vector3(&mut self, value: Vector3) -> Result<()> {
        self.write_vector_with(value, None, None)
    }

    pub fn set_vector3_at(&mut self, value: Vector3, offset: usize) -> Result<()> {
        self.write_vector_with(value, Some(offset), None)
    }

    pub fn set_vector4(&mut self, value: Vector4) -> Result<()> {
        self.write_vector_with(value, None, None)
    }

    pub fn set_vector4_at(&mut self, value: Vector4, offset: usize) -> Result<()> {
        self.write_vector_with(value, Some(offset), None)
    }

    pub fn set_quaternion(&mut self, value: Quaternion) -> Result<()> {
        self.write_vector_with(value, None, None)
    }

    pub fn set_quaternion_at(&mut self, value: Quaternion, offset: usize) -> Result<()> {
        self.write_vector_with(value, Some(offset), None)
    }

    pub fn set_half_vector3(&mut self, value: HalfVector3) -> Result<()> {
        self.write_half_vector3_with(value, None, None)
    }

    pub fn set_half_vector3_at(&mut self, value: HalfVector3, offset: usize) -> Result<()> {
        self.write_half_vector3_with(value, Some(offset), None)
    }
}
