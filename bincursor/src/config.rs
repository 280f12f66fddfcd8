//! Per-cursor configuration
//!
//! Policy a cursor fixes at construction: the default byte order, how text
//! outside the one-byte range is handled, and how far a null-terminated
//! string scan may reach.

use bincursor_core::{ByteOrder, TextPolicy};

/// Region a null-terminated string scan is allowed to cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NullScan {
    /// Stop at the end of the cursor's window
    #[default]
    Window,
    /// Continue past the window end up to the end of the backing storage
    ///
    /// A scan that ends beyond the window leaves the position past `len`.
    /// Accessors at the position then fail with an overrun until the cursor
    /// is moved back with `seek`, `rewind` or a negative `skip` that lands
    /// inside `[0, len]`.
    Backing,
}

/// Configuration for cursor construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CursorConfig {
    /// Byte order used when an accessor is not given one
    pub byte_order: ByteOrder,
    /// Handling of character codes above 255
    pub text_policy: TextPolicy,
    /// Reach of null-terminated string reads
    pub null_scan: NullScan,
}

impl CursorConfig {
    /// Config with the given default byte order
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Shorthand for a big-endian default
    pub fn big_endian(self) -> Self {
        self.with_byte_order(ByteOrder::Big)
    }

    /// Set text policy
    pub fn with_text_policy(mut self, text_policy: TextPolicy) -> Self {
        self.text_policy = text_policy;
        self
    }

    /// Set null-terminated scan reach
    pub fn with_null_scan(mut self, null_scan: NullScan) -> Self {
        self.null_scan = null_scan;
        self
    }
}
