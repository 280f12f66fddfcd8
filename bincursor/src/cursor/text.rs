//! String accessors
//!
//! Strings are stored one byte per character. Fixed strings occupy exactly
//! their length; null-terminated strings end at the first `0x00`.

use super::Cursor;
use crate::config::NullScan;
use bincursor_core::format::constants::NUL;
use bincursor_core::validation::{text, validate_position};
use bincursor_core::{BinError, Result};
use tracing::warn;

impl Cursor {
    /// Read a `len`-byte string at the current position
    pub fn get_string(&mut self, len: usize) -> Result<String> {
        self.read_raw(None, len, |bytes| Ok(text::decode(bytes)))
    }

    /// Read a `len`-byte string at `offset`
    pub fn get_string_at(&mut self, len: usize, offset: usize) -> Result<String> {
        self.read_raw(Some(offset), len, |bytes| Ok(text::decode(bytes)))
    }

    /// Read a null-terminated string at the current position
    pub fn get_null_string(&mut self) -> Result<String> {
        self.read_null_string(None)
    }

    /// Read a null-terminated string at `offset`
    pub fn get_null_string_at(&mut self, offset: usize) -> Result<String> {
        self.read_null_string(Some(offset))
    }

    /// Write `value` at the current position, without a terminator
    ///
    /// Each Unicode scalar value becomes one byte, including characters
    /// outside the Basic Multilingual Plane.
    pub fn set_string(&mut self, value: &str) -> Result<()> {
        self.write_string(value, None)
    }

    /// Write `value` at `offset`, without a terminator
    pub fn set_string_at(&mut self, value: &str, offset: usize) -> Result<()> {
        self.write_string(value, Some(offset))
    }

    fn read_null_string(&mut self, offset: Option<usize>) -> Result<String> {
        let start = validate_position(offset.unwrap_or(self.position), self.len)?;

        // End of the scan region, relative to the window start
        let limit = match self.config.null_scan {
            NullScan::Window => self.len,
            NullScan::Backing => self.storage.len() - self.base,
        };

        let (value, consumed) = {
            let storage = self.storage.read()?;
            let region = &storage[self.absolute(start..limit)];
            let end = region
                .iter()
                .position(|&b| b == NUL)
                .ok_or(BinError::MissingTerminator { offset: start })?;
            (text::decode(&region[..end]), end + 1)
        };

        self.position = start + consumed;
        Ok(value)
    }

    fn write_string(&mut self, value: &str, offset: Option<usize>) -> Result<()> {
        let span = self.span(offset, text::encoded_len(value))?;
        let policy = self.config.text_policy;
        {
            let mut storage = self.storage.write()?;
            text::encode_into(value, policy, &mut storage[self.absolute(span.clone())])?;
        }
        if !text::is_lossless(value) {
            warn!(
                offset = span.start,
                chars = span.len(),
                "string truncated to one byte per character"
            );
        }
        self.position = span.end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CursorConfig;
    use crate::source::ByteSource;
    use bincursor_core::TextPolicy;

    #[test]
    fn test_fixed_string() {
        let mut cursor = Cursor::new(ByteSource::text("HEADbody")).unwrap();
        assert_eq!(cursor.get_string(4).unwrap(), "HEAD");
        assert_eq!(cursor.tell(), 4);
        assert_eq!(cursor.get_string_at(2, 6).unwrap(), "dy");
        assert_eq!(cursor.tell(), 8);

        assert_eq!(cursor.get_string(1), Err(BinError::overrun(8, 1, 8)));
        assert_eq!(cursor.get_string(0).unwrap(), "");
    }

    #[test]
    fn test_fixed_string_decodes_high_bytes() {
        let mut cursor = Cursor::from_bytes(vec![0x63u8, 0x61, 0x66, 0xE9]);
        assert_eq!(cursor.get_string(4).unwrap(), "caf\u{e9}");
    }

    #[test]
    fn test_null_string() {
        let mut cursor = Cursor::from_bytes(b"ab\0cde\0\xff".to_vec());
        assert_eq!(cursor.get_null_string().unwrap(), "ab");
        assert_eq!(cursor.tell(), 3);
        assert_eq!(cursor.get_null_string().unwrap(), "cde");
        assert_eq!(cursor.tell(), 7);

        assert_eq!(cursor.get_null_string_at(2).unwrap(), "");
        assert_eq!(cursor.tell(), 3);
    }

    #[test]
    fn test_null_string_confined_to_window() {
        let backing = b"abcd\0".to_vec();
        let mut cursor = Cursor::new(ByteSource::raw_range(backing, 0, Some(4))).unwrap();
        assert_eq!(
            cursor.get_null_string_at(1),
            Err(BinError::MissingTerminator { offset: 1 })
        );
        assert_eq!(cursor.tell(), 0);

        assert_eq!(
            cursor.get_null_string_at(4),
            Err(BinError::MissingTerminator { offset: 4 })
        );
        assert_eq!(
            cursor.get_null_string_at(5),
            Err(BinError::overrun(5, 0, 4))
        );
    }

    #[test]
    fn test_null_string_backing_scan() {
        let backing = b"xxabcd\0".to_vec();
        let mut cursor = Cursor::with_config(
            ByteSource::raw_range(backing, 2, Some(3)),
            CursorConfig::default().with_null_scan(NullScan::Backing),
        )
        .unwrap();

        assert_eq!(cursor.get_null_string().unwrap(), "abcd");
        // The scan may leave the position past the window end
        assert_eq!(cursor.tell(), 5);
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.get_u8(), Err(BinError::overrun(5, 1, 3)));

        // Only moves landing back inside the window recover the position
        assert_eq!(cursor.skip(-1), Err(BinError::overrun(4, 0, 3)));
        assert_eq!(cursor.tell(), 5);
        cursor.skip(-2).unwrap();
        assert_eq!(cursor.tell(), 3);
        cursor.seek(1).unwrap();
        assert_eq!(cursor.get_u8().unwrap(), b'b');
    }

    #[test]
    fn test_null_string_backing_scan_on_text_window() {
        let mut cursor = Cursor::with_config(
            ByteSource::text_range("--ab\0", 2, Some(2)),
            CursorConfig::default().with_null_scan(NullScan::Backing),
        )
        .unwrap();
        assert_eq!(cursor.base_offset(), 2);
        assert_eq!(cursor.get_null_string().unwrap(), "ab");
        assert_eq!(cursor.tell(), 3);
    }

    #[test]
    fn test_set_string_outside_bmp() {
        let mut cursor = Cursor::zeroed(4);
        cursor.set_string("x\u{1f600}y").unwrap();
        assert_eq!(cursor.tell(), 3);
        assert_eq!(cursor.to_vec().unwrap(), vec![b'x', 0x00, b'y', 0x00]);
    }

    #[test]
    fn test_set_string() {
        let mut cursor = Cursor::from_bytes(vec![0xFFu8; 8]);
        cursor.set_string("hi").unwrap();
        assert_eq!(cursor.tell(), 2);
        cursor.set_string_at("yo", 5).unwrap();
        assert_eq!(cursor.tell(), 7);

        // No terminator is appended
        assert_eq!(
            cursor.to_vec().unwrap(),
            vec![b'h', b'i', 0xFF, 0xFF, 0xFF, b'y', b'o', 0xFF]
        );
        assert_eq!(cursor.set_string("abc"), Err(BinError::overrun(7, 3, 8)));
    }

    #[test]
    fn test_set_string_policies() {
        let mut cursor = Cursor::zeroed(4);
        cursor.set_string("\u{263a}\u{e9}").unwrap();
        assert_eq!(cursor.get_bytes_at(2, 0).unwrap()[..], [0x3A, 0xE9]);

        let mut strict = Cursor::with_config(
            ByteSource::sized(4),
            CursorConfig::default().with_text_policy(TextPolicy::Reject),
        )
        .unwrap();
        assert_eq!(
            strict.set_string("ok\u{263a}"),
            Err(BinError::Encoding {
                index: 2,
                code: 0x263A
            })
        );
        assert_eq!(strict.to_vec().unwrap(), vec![0; 4]);
        assert_eq!(strict.tell(), 0);
    }

    #[test]
    fn test_string_round_trip_through_window() {
        let parent = Cursor::zeroed(16);
        let mut child = parent.sub_window(8, None).unwrap();
        child.set_string("name\0").unwrap();

        let mut reader = parent.sub_window(8, Some(8)).unwrap();
        assert_eq!(reader.get_null_string().unwrap(), "name");
    }
}
