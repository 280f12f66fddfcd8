//! Shared backing storage for cursor windows
//!
//! Every cursor addresses a window inside a [`SharedBytes`] region. Cloning
//! the handle shares the region, so sub-windows alias their parent's bytes
//! and the region lives until the last handle is dropped.

use bincursor_core::{BinError, Result};
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// Concrete memory behind a shared region
pub(crate) enum Storage {
    Heap(Vec<u8>),
    #[cfg(feature = "mmap")]
    Mapped(memmap2::MmapMut),
}

impl Deref for Storage {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Storage::Heap(bytes) => bytes,
            #[cfg(feature = "mmap")]
            Storage::Mapped(map) => map,
        }
    }
}

impl DerefMut for Storage {
    fn deref_mut(&mut self) -> &mut [u8] {
        match self {
            Storage::Heap(bytes) => bytes,
            #[cfg(feature = "mmap")]
            Storage::Mapped(map) => map,
        }
    }
}

/// Reference-counted handle to a fixed-size byte region
#[derive(Clone)]
pub struct SharedBytes {
    inner: Rc<RefCell<Storage>>,
    // Regions are never resized, so the length is cached outside the cell
    len: usize,
}

impl SharedBytes {
    pub(crate) fn from_storage(storage: Storage) -> Self {
        let len = storage.len();
        Self {
            inner: Rc::new(RefCell::new(storage)),
            len,
        }
    }

    /// Allocate a zero-filled region of `len` bytes
    pub fn zeroed(len: usize) -> Self {
        Self::from_storage(Storage::Heap(vec![0; len]))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when both handles refer to the same region
    pub fn ptr_eq(&self, other: &SharedBytes) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Copy the whole region out
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(self.read()?.to_vec())
    }

    /// Number of live handles to this region
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    pub(crate) fn read(&self) -> Result<Ref<'_, [u8]>> {
        let storage = self
            .inner
            .try_borrow()
            .map_err(|_| BinError::StorageBusy)?;
        Ok(Ref::map(storage, |s| &**s))
    }

    pub(crate) fn write(&self) -> Result<RefMut<'_, [u8]>> {
        let storage = self
            .inner
            .try_borrow_mut()
            .map_err(|_| BinError::StorageBusy)?;
        Ok(RefMut::map(storage, |s| &mut **s))
    }

    #[cfg(feature = "mmap")]
    pub(crate) fn storage_mut(&self) -> Result<RefMut<'_, Storage>> {
        self.inner.try_borrow_mut().map_err(|_| BinError::StorageBusy)
    }
}

impl From<Vec<u8>> for SharedBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_storage(Storage::Heap(bytes))
    }
}

impl From<&[u8]> for SharedBytes {
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for SharedBytes {
    fn from(bytes: [u8; N]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl fmt::Debug for SharedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.inner.try_borrow().as_deref() {
            Ok(Storage::Heap(_)) => "heap",
            #[cfg(feature = "mmap")]
            Ok(Storage::Mapped(_)) => "mapped",
            Err(_) => "borrowed",
        };
        f.debug_struct("SharedBytes")
            .field("len", &self.len)
            .field("storage", &kind)
            .field("handles", &self.handle_count())
            .finish()
    }
}
