//! Validation utilities for window access
//!
//! Pure functions with no I/O: bounds arithmetic and text conversion.

pub mod bounds;
pub mod text;

pub use bounds::{checked_span, offset_position, resolve_window, validate_position};
pub use text::TextPolicy;
