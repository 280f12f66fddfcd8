//! bincursor - positional binary access over shared byte windows
//!
//! This library reads and writes fixed-width scalars, vectors and strings
//! in an addressable byte window, tracking an implicit position that
//! advances after every access.
//!
//! ## Architecture
//!
//! - **bincursor-core**: Byte order, scalar and half-float codecs, bounds
//!   validation (no I/O, `no_std`)
//! - **bincursor**: Shared storage, source resolution, the cursor itself and
//!   optional file mapping and task coordination
//!
//! ## Quick Start
//!
//! ```rust
//! use bincursor::{ByteSource, Cursor, CursorConfig};
//!
//! fn example() -> bincursor::Result<()> {
//!     let mut cursor = Cursor::with_config(ByteSource::sized(16), CursorConfig::default())?;
//!     cursor.set_u16(0xCAFE)?;
//!     cursor.set_vector3([1.0, 2.0, 3.0])?;
//!     assert_eq!(cursor.tell(), 14);
//!
//!     // An explicit offset reads there and moves the position past it
//!     assert_eq!(cursor.get_u16_at(0)?, 0xCAFE);
//!     assert_eq!(cursor.get_vector3()?, [1.0, 2.0, 3.0]);
//!
//!     // Sub-windows share storage with their parent
//!     let mut tail = cursor.sub_window(2, None)?;
//!     assert_eq!(tail.get_f32()?, 1.0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **mmap** (default): cursors over memory-mapped files
//! - **async** (default): [`TaskLock`] and task pacing helpers on tokio
//! - **serde**: serialisable [`CursorConfig`]

pub use bincursor_core::{
    // Codecs
    decode_f16, encode_f16, ByteOrder, Scalar,
    // Error handling
    BinError, ErrorCategory, Result,
    // Policy
    TextPolicy,
};

pub mod config;
pub mod cursor;
#[cfg(feature = "mmap")]
pub mod mmap;
pub mod source;
pub mod storage;
#[cfg(feature = "async")]
pub mod sync;

pub use config::{CursorConfig, NullScan};
pub use cursor::{Cursor, HalfVector3, Quaternion, Vector2, Vector3, Vector4};
pub use source::ByteSource;
pub use storage::SharedBytes;

#[cfg(feature = "async")]
pub use sync::{delay, yield_now, TaskGuard, TaskLock};
