//! Memory-mapped file storage
//!
//! Maps a file read-write so a cursor addresses its bytes directly. Writes
//! through any cursor on the mapping land in the page cache and reach the
//! file on [`SharedBytes::flush`] or when the last handle drops.

use crate::config::CursorConfig;
use crate::cursor::Cursor;
use crate::source::ByteSource;
use crate::storage::{SharedBytes, Storage};
use memmap2::MmapOptions;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use tracing::debug;

impl SharedBytes {
    /// Map the file at `path` as a shared region
    pub fn map_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().read(true).write(true).open(path)?;

        // SAFETY: the mapping stays valid while the returned handle lives.
        // Concurrent modification of the file by another process is not
        // guarded against and would be observed through the mapping.
        let map = unsafe { MmapOptions::new().map_mut(&file)? };

        debug!(path = %path.display(), len = map.len(), "file mapped");
        Ok(Self::from_storage(Storage::Mapped(map)))
    }

    /// Write mapped bytes back to the file; a no-op for heap regions
    pub fn flush(&self) -> io::Result<()> {
        let storage = self
            .storage_mut()
            .map_err(|err| io::Error::new(io::ErrorKind::WouldBlock, err))?;
        match &*storage {
            Storage::Mapped(map) => map.flush(),
            Storage::Heap(_) => Ok(()),
        }
    }
}

impl Cursor {
    /// Cursor over the whole of a memory-mapped file
    pub fn map_file<P: AsRef<Path>>(path: P, config: CursorConfig) -> io::Result<Cursor> {
        let bytes = SharedBytes::map_file(path)?;
        Cursor::with_config(ByteSource::raw(bytes), config)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_map_file_reads_contents() {
        let file = temp_file(&[0x01, 0x00, 0x00, 0x00, b'o', b'k', 0]);
        let mut cursor = Cursor::map_file(file.path(), CursorConfig::default()).unwrap();
        assert_eq!(cursor.len(), 7);
        assert_eq!(cursor.get_u32().unwrap(), 1);
        assert_eq!(cursor.get_null_string().unwrap(), "ok");
        assert!(format!("{:?}", cursor.buffer()).contains("mapped"));
    }

    #[test]
    fn test_writes_reach_the_file() {
        let file = temp_file(&[0u8; 8]);
        let mut cursor = Cursor::map_file(file.path(), CursorConfig::default().big_endian()).unwrap();
        cursor.set_u32_at(0xCAFE_F00D, 4).unwrap();
        cursor.buffer().flush().unwrap();
        drop(cursor);

        let contents = std::fs::read(file.path()).unwrap();
        assert_eq!(contents, vec![0, 0, 0, 0, 0xCA, 0xFE, 0xF0, 0x0D]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SharedBytes::map_file(dir.path().join("absent.bin")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_flush_heap_is_noop() {
        SharedBytes::zeroed(4).flush().unwrap();
    }
}
