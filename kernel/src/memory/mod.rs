//! Raw memory primitives.
//!
//! Explicit `(base, length)` ranges plus the byte-granular fill/copy
//! operations that work over them.
//!
//!   range.rs    — MemoryRange, RangeFlags, MemoryError
//!   raw.rs      — fill/copy (unchecked) and try_fill/try_copy (checked)
//!   compiler.rs — C-ABI memset/memcpy exports (freestanding builds only)

pub mod range;
pub mod raw;

#[cfg(feature = "freestanding")]
pub mod compiler;

pub use range::{MemoryError, MemoryRange, RangeFlags};
pub use raw::{copy, fill, try_copy, try_fill};
