//! C-ABI memory intrinsics for freestanding builds.
//!
//! rustc (and the C objects linked into the bootstrap) assume the target
//! provides `memset` and `memcpy`. Hosted builds get them from libc, so
//! these exports are gated behind the `freestanding` feature to avoid
//! duplicate symbols in test binaries.
//!
//! Both are the same ascending byte loops as [`super::raw`], reconstituted
//! into the bare-pointer signatures the ABI dictates.

use super::range::{MemoryRange, RangeFlags};
use super::raw;

/// C `memset`: writes the low byte of `value` to `num` bytes at `ptr`.
///
/// # Safety
/// `ptr` must be valid for writes of `num` bytes.
#[no_mangle]
pub unsafe extern "C" fn memset(ptr: *mut u8, value: i32, num: usize) -> *mut u8 {
    let range = MemoryRange::new(ptr as usize, num, RangeFlags::RW);
    // SAFETY: forwarded from the caller, per the C contract.
    unsafe { raw::fill(range, value as u8) };
    ptr
}

/// C `memcpy`: copies `num` bytes from `src` to `dst`. Non-overlap-safe.
///
/// # Safety
/// `dst` must be valid for writes and `src` for reads of `num` bytes, and
/// the regions must not overlap.
#[no_mangle]
pub unsafe extern "C" fn memcpy(dst: *mut u8, src: *const u8, num: usize) -> *mut u8 {
    let d = MemoryRange::new(dst as usize, num, RangeFlags::RW);
    let s = MemoryRange::new(src as usize, num, RangeFlags::READ);
    // SAFETY: forwarded from the caller, per the C contract.
    unsafe { raw::copy(d, s, num) };
    dst
}
