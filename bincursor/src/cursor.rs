//! Positional cursor over a shared byte window
//!
//! A [`Cursor`] owns a resolved window and an implicit position. Every
//! accessor reads or writes at the position unless given an explicit offset,
//! and in both cases leaves the position just past the bytes it consumed:
//! an explicit offset moves the cursor too. Composite readers rely on this
//! to chain component reads after their first one.
//!
//! Accessors validate their whole span before touching memory, so a failed
//! call leaves both the window content and the position unchanged.

mod composite;
mod scalar;
mod text;

pub use composite::{HalfVector3, Quaternion, Vector2, Vector3, Vector4};

use crate::config::CursorConfig;
use crate::source::ByteSource;
use crate::storage::SharedBytes;
use bincursor_core::validation::{checked_span, offset_position, validate_position};
use bincursor_core::{ByteOrder, Result};
use std::cell::RefMut;
use std::ops::Range;
use tracing::{debug, trace};

/// Binary cursor over a window of shared bytes
#[derive(Debug, Clone)]
pub struct Cursor {
    storage: SharedBytes,
    base: usize,
    len: usize,
    position: usize,
    config: CursorConfig,
}

impl Cursor {
    /// Build a cursor with the default config
    ///
    /// A cursor over an [`ByteSource::ExistingWindow`] inherits its parent's
    /// config instead.
    pub fn new(source: ByteSource<'_>) -> Result<Self> {
        let config = match &source {
            ByteSource::ExistingWindow { cursor, .. } => cursor.config,
            _ => CursorConfig::default(),
        };
        Self::with_config(source, config)
    }

    /// Build a cursor with an explicit config
    pub fn with_config(source: ByteSource<'_>, config: CursorConfig) -> Result<Self> {
        let kind = source.kind();
        let window = source.resolve(config.text_policy)?;

        debug!(
            source = kind,
            base = window.base,
            len = window.len,
            order = %config.byte_order,
            "cursor constructed"
        );

        Ok(Self {
            storage: window.storage,
            base: window.base,
            len: window.len,
            position: 0,
            config,
        })
    }

    /// Cursor over the whole of an existing region
    pub fn from_bytes(bytes: impl Into<SharedBytes>) -> Self {
        let storage = bytes.into();
        let len = storage.len();
        Self {
            storage,
            base: 0,
            len,
            position: 0,
            config: CursorConfig::default(),
        }
    }

    /// Cursor over a fresh zero-filled region
    pub fn zeroed(len: usize) -> Self {
        Self::from_bytes(SharedBytes::zeroed(len))
    }

    /// Sub-window starting `offset` bytes into this window, sharing storage
    pub fn sub_window(&self, offset: usize, len: Option<usize>) -> Result<Cursor> {
        Cursor::new(ByteSource::window(self, offset, len))
    }

    /// Current position
    pub fn tell(&self) -> usize {
        self.position
    }

    /// Move to `position`, which must lie in `[0, len]`
    pub fn seek(&mut self, position: usize) -> Result<()> {
        self.position = validate_position(position, self.len)?;
        trace!(position, "seek");
        Ok(())
    }

    /// Move by `delta` bytes from the current position
    pub fn skip(&mut self, delta: isize) -> Result<()> {
        self.position = offset_position(self.position, delta, self.len)?;
        trace!(delta, position = self.position, "skip");
        Ok(())
    }

    /// Move back to the start of the window
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Window length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes between the position and the window end
    pub fn remaining(&self) -> usize {
        self.len.saturating_sub(self.position)
    }

    /// Default byte order
    pub fn byte_order(&self) -> ByteOrder {
        self.config.byte_order
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// Offset of the window start inside the backing storage
    pub fn base_offset(&self) -> usize {
        self.base
    }

    /// Handle to the backing storage
    pub fn buffer(&self) -> SharedBytes {
        self.storage.clone()
    }

    /// Copy the window out
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(self.storage.read()?[self.absolute(0..self.len)].to_vec())
    }

    /// View of `len` bytes at the current position
    ///
    /// The view aliases the backing storage: writes through it are visible
    /// to every cursor sharing the region.
    pub fn get_bytes(&mut self, len: usize) -> Result<RefMut<'_, [u8]>> {
        self.bytes_view(None, len)
    }

    /// View of `len` bytes at `offset`
    pub fn get_bytes_at(&mut self, len: usize, offset: usize) -> Result<RefMut<'_, [u8]>> {
        self.bytes_view(Some(offset), len)
    }

    /// Copy `bytes` in at the current position
    pub fn set_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_raw(None, bytes)
    }

    /// Copy `bytes` in at `offset`
    pub fn set_bytes_at(&mut self, bytes: &[u8], offset: usize) -> Result<()> {
        self.write_raw(Some(offset), bytes)
    }

    fn bytes_view(&mut self, offset: Option<usize>, len: usize) -> Result<RefMut<'_, [u8]>> {
        let span = self.span(offset, len)?;
        let absolute = self.absolute(span.clone());
        let storage = self.storage.write()?;
        self.position = span.end;
        Ok(RefMut::map(storage, |bytes| &mut bytes[absolute]))
    }

    /// Window-relative span of `width` bytes at `offset` or the position
    pub(crate) fn span(&self, offset: Option<usize>, width: usize) -> Result<Range<usize>> {
        checked_span(offset.unwrap_or(self.position), width, self.len)
    }

    /// Translate a window-relative range into a storage range
    pub(crate) fn absolute(&self, span: Range<usize>) -> Range<usize> {
        self.base + span.start..self.base + span.end
    }

    /// Read `width` bytes, hand them to `decode`, advance
    pub(crate) fn read_raw<T>(
        &mut self,
        offset: Option<usize>,
        width: usize,
        decode: impl FnOnce(&[u8]) -> Result<T>,
    ) -> Result<T> {
        let span = self.span(offset, width)?;
        let value = {
            let storage = self.storage.read()?;
            decode(&storage[self.absolute(span.clone())])?
        };
        self.position = span.end;
        Ok(value)
    }

    /// Copy `bytes` into the window, advance
    pub(crate) fn write_raw(&mut self, offset: Option<usize>, bytes: &[u8]) -> Result<()> {
        let span = self.span(offset, bytes.len())?;
        self.storage.write()?[self.absolute(span.clone())].copy_from_slice(bytes);
        self.position = span.end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bincursor_core::BinError;

    #[test]
    fn test_tell_seek_skip() {
        let mut cursor = Cursor::zeroed(8);
        assert_eq!(cursor.tell(), 0);

        cursor.seek(6).unwrap();
        assert_eq!(cursor.tell(), 6);
        assert_eq!(cursor.remaining(), 2);

        cursor.skip(2).unwrap();
        assert_eq!(cursor.tell(), 8);

        cursor.skip(-5).unwrap();
        assert_eq!(cursor.tell(), 3);

        cursor.rewind();
        assert_eq!(cursor.tell(), 0);
    }

    #[test]
    fn test_seek_out_of_bounds() {
        let mut cursor = Cursor::zeroed(8);
        cursor.seek(4).unwrap();

        assert_eq!(cursor.seek(9), Err(BinError::overrun(9, 0, 8)));
        assert_eq!(cursor.skip(5), Err(BinError::overrun(9, 0, 8)));
        assert_eq!(cursor.skip(-5), Err(BinError::overrun(4, 5, 8)));
        assert_eq!(cursor.tell(), 4);
    }

    #[test]
    fn test_window_metadata() {
        let cursor = Cursor::with_config(
            ByteSource::raw_range(vec![0u8; 32], 8, Some(16)),
            CursorConfig::default().big_endian(),
        )
        .unwrap();
        assert_eq!(cursor.len(), 16);
        assert!(!cursor.is_empty());
        assert_eq!(cursor.base_offset(), 8);
        assert_eq!(cursor.byte_order(), ByteOrder::Big);
        assert_eq!(cursor.buffer().len(), 32);
    }

    #[test]
    fn test_get_bytes_is_a_view() {
        let mut cursor = Cursor::from_bytes(vec![1u8, 2, 3, 4, 5, 6]);
        {
            let mut view = cursor.get_bytes_at(2, 1).unwrap();
            assert_eq!(&*view, &[2, 3]);
            view[0] = 0xAA;
        }
        assert_eq!(cursor.tell(), 3);
        assert_eq!(cursor.to_vec().unwrap(), vec![1, 0xAA, 3, 4, 5, 6]);

        let view = cursor.get_bytes(3).unwrap();
        assert_eq!(&*view, &[4, 5, 6]);
    }

    #[test]
    fn test_get_bytes_overrun() {
        let mut cursor = Cursor::zeroed(4);
        cursor.seek(2).unwrap();
        assert_eq!(cursor.get_bytes(3).err(), Some(BinError::overrun(2, 3, 4)));
        assert_eq!(cursor.tell(), 2);
    }

    #[test]
    fn test_live_view_blocks_aliasing_cursor() {
        let mut parent = Cursor::zeroed(8);
        let mut child = parent.sub_window(4, None).unwrap();

        let view = parent.get_bytes(8).unwrap();
        assert_eq!(child.set_bytes(&[1]), Err(BinError::StorageBusy));
        drop(view);

        child.set_bytes(&[1]).unwrap();
        assert_eq!(parent.get_u8_at(4).unwrap(), 1);
    }

    #[test]
    fn test_set_bytes() {
        let mut cursor = Cursor::zeroed(6);
        cursor.set_bytes(&[1, 2]).unwrap();
        cursor.set_bytes_at(&[9, 9], 4).unwrap();
        assert_eq!(cursor.tell(), 6);
        assert_eq!(cursor.to_vec().unwrap(), vec![1, 2, 0, 0, 9, 9]);

        assert_eq!(
            cursor.set_bytes_at(&[7, 7, 7], 4),
            Err(BinError::overrun(4, 3, 6))
        );
        assert_eq!(cursor.to_vec().unwrap(), vec![1, 2, 0, 0, 9, 9]);
    }

    #[test]
    fn test_sub_window_shares_storage() {
        let mut parent = Cursor::from_bytes(vec![0u8; 16]);
        let mut child = parent.sub_window(4, Some(8)).unwrap();
        assert_eq!(child.base_offset(), 4);
        assert_eq!(child.len(), 8);

        child.set_u32_at(0xDEAD_BEEF, 0).unwrap();
        assert_eq!(parent.get_u32_at(4).unwrap(), 0xDEAD_BEEF);

        // Grandchild offsets compose additively
        let grandchild = child.sub_window(2, None).unwrap();
        assert_eq!(grandchild.base_offset(), 6);
        assert_eq!(grandchild.len(), 6);

        // Storage outlives the parent
        drop(parent);
        assert_eq!(child.get_u32_at(0).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_sub_window_inherits_config() {
        let parent = Cursor::with_config(
            ByteSource::sized(8),
            CursorConfig::default().big_endian(),
        )
        .unwrap();
        let child = parent.sub_window(0, None).unwrap();
        assert_eq!(child.byte_order(), ByteOrder::Big);

        let other = Cursor::with_config(ByteSource::window(&parent, 0, None), CursorConfig::default())
            .unwrap();
        assert_eq!(other.byte_order(), ByteOrder::Little);
    }

    #[test]
    fn test_sized_source_window() {
        let mut cursor = Cursor::new(ByteSource::sized_range(16, 4, Some(8))).unwrap();
        assert_eq!(cursor.base_offset(), 4);
        assert_eq!(cursor.len(), 8);

        cursor.set_u32_at(7, 4).unwrap();
        assert_eq!(cursor.buffer().to_vec().unwrap()[8], 7);
        assert_eq!(cursor.set_u8_at(1, 8), Err(BinError::overrun(8, 1, 8)));
    }

    #[test]
    fn test_source_equivalence() {
        let bytes = vec![0x10u8, 0x20, 0x30, 0x40, 0x50, 0x60];

        let mut raw = Cursor::new(ByteSource::raw(bytes.clone())).unwrap();

        let mut sized = Cursor::new(ByteSource::sized(bytes.len())).unwrap();
        sized.set_bytes(&bytes).unwrap();
        sized.rewind();

        let holder = Cursor::new(ByteSource::raw_range(
            [vec![0xFFu8; 3], bytes.clone()].concat(),
            3,
            None,
        ))
        .unwrap();
        let mut windowed = Cursor::new(ByteSource::window(&holder, 0, None)).unwrap();

        let expected = bytes.as_slice();
        assert_eq!(&*raw.get_bytes(6).unwrap(), expected);
        assert_eq!(&*sized.get_bytes(6).unwrap(), expected);
        assert_eq!(&*windowed.get_bytes(6).unwrap(), expected);
    }
}
