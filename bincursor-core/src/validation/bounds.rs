//! Window bounds validation
//!
//! Pure arithmetic on offsets and lengths with overflow protection. Every
//! accessor validates its span here before touching memory.

use crate::{BinError, Result};
use core::ops::Range;

/// Validate an access of `width` bytes at `offset` in a window of `len` bytes
///
/// Returns the byte range the access covers.
pub const fn checked_span(offset: usize, width: usize, len: usize) -> Result<Range<usize>> {
    let end = match offset.checked_add(width) {
        Some(end) => end,
        None => return Err(BinError::overrun(offset, width, len)),
    };

    if end > len {
        return Err(BinError::overrun(offset, width, len));
    }

    Ok(offset..end)
}

/// Validate that `position` lies in `[0, len]`
pub const fn validate_position(position: usize, len: usize) -> Result<usize> {
    if position > len {
        return Err(BinError::overrun(position, 0, len));
    }
    Ok(position)
}

/// Move `position` by a signed `delta`, staying inside `[0, len]`
pub const fn offset_position(position: usize, delta: isize, len: usize) -> Result<usize> {
    match position.checked_add_signed(delta) {
        Some(target) => validate_position(target, len),
        // Moving before the window start reports the original position
        None => Err(BinError::overrun(position, delta.unsigned_abs(), len)),
    }
}

/// Resolve a sub-window of a source region of `available` bytes
///
/// The window starts `offset` bytes into the region and spans `len` bytes,
/// or the remainder of the region when `len` is `None`.
pub const fn resolve_window(
    offset: usize,
    len: Option<usize>,
    available: usize,
) -> Result<Range<usize>> {
    if offset > available {
        return Err(BinError::InvalidSource {
            offset,
            len: match len {
                Some(len) => len,
                None => 0,
            },
            available,
        });
    }

    let len = match len {
        Some(len) => len,
        None => available - offset,
    };

    match offset.checked_add(len) {
        Some(end) if end <= available => Ok(offset..end),
        _ => Err(BinError::InvalidSource {
            offset,
            len,
            available,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_span() {
        assert_eq!(checked_span(0, 4, 8), Ok(0..4));
        assert_eq!(checked_span(4, 4, 8), Ok(4..8));
        assert_eq!(checked_span(8, 0, 8), Ok(8..8));

        assert_eq!(checked_span(5, 4, 8), Err(BinError::overrun(5, 4, 8)));
        assert_eq!(checked_span(9, 0, 8), Err(BinError::overrun(9, 0, 8)));
        assert_eq!(
            checked_span(usize::MAX, 2, 8),
            Err(BinError::overrun(usize::MAX, 2, 8))
        );
    }

    #[test]
    fn test_validate_position() {
        assert_eq!(validate_position(0, 0), Ok(0));
        assert_eq!(validate_position(16, 16), Ok(16));
        assert_eq!(validate_position(17, 16), Err(BinError::overrun(17, 0, 16)));
    }

    #[test]
    fn test_offset_position() {
        assert_eq!(offset_position(4, 4, 8), Ok(8));
        assert_eq!(offset_position(4, -4, 8), Ok(0));
        assert_eq!(offset_position(4, 5, 8), Err(BinError::overrun(9, 0, 8)));
        assert_eq!(offset_position(4, -5, 8), Err(BinError::overrun(4, 5, 8)));
    }

    #[test]
    fn test_resolve_window() {
        assert_eq!(resolve_window(0, None, 10), Ok(0..10));
        assert_eq!(resolve_window(4, None, 10), Ok(4..10));
        assert_eq!(resolve_window(4, Some(2), 10), Ok(4..6));
        assert_eq!(resolve_window(10, None, 10), Ok(10..10));

        assert_eq!(
            resolve_window(11, None, 10),
            Err(BinError::InvalidSource {
                offset: 11,
                len: 0,
                available: 10
            })
        );
        assert_eq!(
            resolve_window(4, Some(7), 10),
            Err(BinError::InvalidSource {
                offset: 4,
                len: 7,
                available: 10
            })
        );
    }
}
