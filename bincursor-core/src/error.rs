//! Error types for cursor operations

/// Errors that can occur while resolving a window or accessing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinError {
    /// Requested window does not fit inside the source region
    InvalidSource {
        offset: usize,
        len: usize,
        available: usize,
    },
    /// Access of `width` bytes at `offset` would cross the window end
    BufferOverrun {
        offset: usize,
        width: usize,
        len: usize,
    },
    /// Character code does not fit in one byte under the `Reject` text policy
    Encoding { index: usize, code: u32 },
    /// No `0x00` byte between `offset` and the end of the scan region
    MissingTerminator { offset: usize },
    /// Backing storage is held by a live byte view
    StorageBusy,
}

/// Coarse classification of [`BinError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Construction,
    Bounds,
    Encoding,
    Storage,
}

impl BinError {
    /// Shorthand for an overrun of `width` bytes at `offset` in a window of `len`
    pub const fn overrun(offset: usize, width: usize, len: usize) -> Self {
        BinError::BufferOverrun { offset, width, len }
    }

    pub const fn category(&self) -> ErrorCategory {
        match self {
            BinError::InvalidSource { .. } => ErrorCategory::Construction,
            BinError::BufferOverrun { .. } | BinError::MissingTerminator { .. } => {
                ErrorCategory::Bounds
            }
            BinError::Encoding { .. } => ErrorCategory::Encoding,
            BinError::StorageBusy => ErrorCategory::Storage,
        }
    }
}

impl core::fmt::Display for BinError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BinError::InvalidSource {
                offset,
                len,
                available,
            } => write!(
                f,
                "Window of {len} bytes at offset {offset} exceeds source of {available} bytes"
            ),
            BinError::BufferOverrun { offset, width, len } => write!(
                f,
                "Access of {width} bytes at offset {offset} overruns window of {len} bytes"
            ),
            BinError::Encoding { index, code } => write!(
                f,
                "Character U+{code:04X} at index {index} does not fit in one byte"
            ),
            BinError::MissingTerminator { offset } => {
                write!(f, "No null terminator after offset {offset}")
            }
            BinError::StorageBusy => write!(f, "Backing storage is borrowed by a byte view"),
        }
    }
}

impl core::error::Error for BinError {}

/// Result type for cursor operations
pub type Result<T> = core::result::Result<T, BinError>;
