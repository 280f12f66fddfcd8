//! Buffer source resolution
//!
//! A cursor can be built over four kinds of source. Each is resolved once,
//! at construction, into a [`Window`]: a shared storage handle plus the base
//! offset and length of the addressable range inside it.

use crate::cursor::Cursor;
use crate::storage::SharedBytes;
use bincursor_core::validation::text;
use bincursor_core::{resolve_window, Result, TextPolicy};
use tracing::warn;

/// The accepted ways of supplying a cursor's bytes
#[derive(Debug, Clone)]
pub enum ByteSource<'a> {
    /// An existing region, optionally narrowed to `len` bytes at `offset`
    RawBlock {
        bytes: SharedBytes,
        offset: Option<usize>,
        len: Option<usize>,
    },
    /// A fresh zero-filled region of `size` bytes, optionally narrowed
    SizedAllocation {
        size: usize,
        offset: Option<usize>,
        len: Option<usize>,
    },
    /// A string stored one byte per character, optionally narrowed
    ///
    /// A character is a Unicode scalar value, so characters outside the
    /// Basic Multilingual Plane take one byte rather than two.
    TextBytes {
        text: &'a str,
        offset: Option<usize>,
        len: Option<usize>,
    },
    /// A sub-window of another cursor's window, sharing its storage
    ExistingWindow {
        cursor: &'a Cursor,
        offset: Option<usize>,
        len: Option<usize>,
    },
}

impl<'a> ByteSource<'a> {
    /// Whole region source
    pub fn raw(bytes: impl Into<SharedBytes>) -> Self {
        ByteSource::RawBlock {
            bytes: bytes.into(),
            offset: None,
            len: None,
        }
    }

    /// Region source narrowed to `offset..offset + len`
    pub fn raw_range(bytes: impl Into<SharedBytes>, offset: usize, len: Option<usize>) -> Self {
        ByteSource::RawBlock {
            bytes: bytes.into(),
            offset: Some(offset),
            len,
        }
    }

    pub fn sized(size: usize) -> Self {
        ByteSource::SizedAllocation {
            size,
            offset: None,
            len: None,
        }
    }

    /// Zero-filled region of `size` bytes, windowed to `offset..offset + len`
    pub fn sized_range(size: usize, offset: usize, len: Option<usize>) -> Self {
        ByteSource::SizedAllocation {
            size,
            offset: Some(offset),
            len,
        }
    }

    pub fn text(text: &'a str) -> Self {
        ByteSource::TextBytes {
            text,
            offset: None,
            len: None,
        }
    }

    /// Text region windowed to `offset..offset + len`
    pub fn text_range(text: &'a str, offset: usize, len: Option<usize>) -> Self {
        ByteSource::TextBytes {
            text,
            offset: Some(offset),
            len,
        }
    }

    /// Sub-window of `cursor` starting `offset` bytes into its window
    pub fn window(cursor: &'a Cursor, offset: usize, len: Option<usize>) -> Self {
        ByteSource::ExistingWindow {
            cursor,
            offset: Some(offset),
            len,
        }
    }

    /// Short name of the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ByteSource::RawBlock { .. } => "raw-block",
            ByteSource::SizedAllocation { .. } => "sized-allocation",
            ByteSource::TextBytes { .. } => "text-bytes",
            ByteSource::ExistingWindow { .. } => "existing-window",
        }
    }

    /// Resolve into a window, encoding text under `policy`
    pub(crate) fn resolve(self, policy: TextPolicy) -> Result<Window> {
        match self {
            ByteSource::RawBlock { bytes, offset, len } => Window::narrow(bytes, offset, len),
            ByteSource::SizedAllocation { size, offset, len } => {
                // Validate before allocating
                resolve_window(offset.unwrap_or(0), len, size)?;
                Window::narrow(SharedBytes::zeroed(size), offset, len)
            }
            ByteSource::TextBytes { text: value, offset, len } => {
                let bytes = text::encode(value, policy)?;
                if !text::is_lossless(value) {
                    warn!(
                        chars = bytes.len(),
                        "text source truncated to one byte per character"
                    );
                }
                Window::narrow(SharedBytes::from(bytes), offset, len)
            }
            ByteSource::ExistingWindow {
                cursor,
                offset,
                len,
            } => {
                // Offsets compose against the parent's base; the parent's
                // window bounds the child
                let range = resolve_window(offset.unwrap_or(0), len, cursor.len())?;
                Ok(Window {
                    storage: cursor.buffer(),
                    base: cursor.base_offset() + range.start,
                    len: range.len(),
                })
            }
        }
    }
}

/// A resolved addressable range inside shared storage
#[derive(Debug, Clone)]
pub(crate) struct Window {
    pub storage: SharedBytes,
    pub base: usize,
    pub len: usize,
}

impl Window {
    /// Window over `offset..offset + len` of a whole region
    fn narrow(storage: SharedBytes, offset: Option<usize>, len: Option<usize>) -> Result<Self> {
        let range = resolve_window(offset.unwrap_or(0), len, storage.len())?;
        Ok(Window {
            storage,
            base: range.start,
            len: range.len(),
        })
    }
}
