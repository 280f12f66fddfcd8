#![no_std]

//! bincursor core - positional binary access definitions
//!
//! This crate provides the pure building blocks of a binary cursor: byte
//! order, the fixed-width scalar codec, the half-precision float codec and
//! window bounds validation. It performs no I/O and owns no buffers.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::{checked_span, resolve_window, TextPolicy};
