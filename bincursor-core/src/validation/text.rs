//! One-byte-per-character text conversion
//!
//! Strings map to bytes one Unicode scalar value at a time: each character
//! becomes the low 8 bits of its code, and each byte reads back as the
//! character with that code (Latin-1).

use crate::{BinError, Result};

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// What to do with characters whose code does not fit in one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextPolicy {
    /// Keep the low 8 bits and carry on
    #[default]
    Truncate,
    /// Fail with [`BinError::Encoding`]
    Reject,
}

/// Encoded length of `text` in bytes, which is its character count
pub fn encoded_len(text: &str) -> usize {
    text.chars().count()
}

/// True when every character of `text` fits in one byte
pub fn is_lossless(text: &str) -> bool {
    text.chars().all(|c| (c as u32) <= 0xFF)
}

/// Convert a single character at `index` under `policy`
pub fn encode_char(index: usize, c: char, policy: TextPolicy) -> Result<u8> {
    let code = c as u32;
    if code > 0xFF && policy == TextPolicy::Reject {
        return Err(BinError::Encoding { index, code });
    }
    Ok((code & 0xFF) as u8)
}

/// Encode `text` into the front of `out`, returning the number of bytes written
///
/// With [`TextPolicy::Reject`] the whole string is checked before `out` is
/// modified. `out` must hold at least [`encoded_len`] bytes.
pub fn encode_into(text: &str, policy: TextPolicy, out: &mut [u8]) -> Result<usize> {
    let len = encoded_len(text);
    if out.len() < len {
        return Err(BinError::overrun(0, len, out.len()));
    }

    if policy == TextPolicy::Reject {
        for (index, c) in text.chars().enumerate() {
            encode_char(index, c, policy)?;
        }
    }

    for (slot, c) in out.iter_mut().zip(text.chars()) {
        *slot = (c as u32 & 0xFF) as u8;
    }
    Ok(len)
}

/// Encode `text` into a new byte vector
#[cfg(feature = "alloc")]
pub fn encode(text: &str, policy: TextPolicy) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(index, c)| encode_char(index, c, policy))
        .collect()
}

/// Decode bytes as one character per byte
#[cfg(feature = "alloc")]
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
