// =============================================================================
// OpenEdir — Raw Fill and Copy
// =============================================================================
//
// The byte-granular primitives behind the bootstrap's memset/memcpy, written
// against MemoryRange instead of bare pointers.
//
// Both primitives proceed strictly byte-by-byte in ascending address order
// through volatile accesses. Ascending order is part of the contract: a
// caller filling a range that aliases its own source (benign overlap, e.g.
// sliding a pattern forward) may rely on it. Volatile accesses keep the
// loops from being collapsed into wide stores that would break that
// ordering guarantee, and keep them honest against MMIO-backed ranges.
//
// Two tiers:
//   fill / copy         — unchecked. The declared bounds are debug-asserted
//                         only; release builds trust the caller completely.
//   try_fill / try_copy — checked. Bounds, overlap, and writability are
//                         validated and violations come back as MemoryError.
//
// Every function here is `unsafe` for the same underlying reason: a
// MemoryRange is just a description, and only the caller knows whether the
// described memory is real, mapped, and exclusively theirs for the duration
// of the call.
//
// =============================================================================

use core::ptr;

use super::range::{MemoryError, MemoryRange};

/// Writes `value` to every byte of `range`, ascending. Returns `range.base()`.
///
/// A zero-length range is a no-op. The copy primitive forbids overlap, but
/// `fill` has a single range and therefore no aliasing question: ascending
/// byte order is guaranteed and may be relied on.
///
/// # Safety
/// `range` must describe memory that is valid for writes for its entire
/// declared length, with no other access to it for the duration of the call.
///
/// # Panics
/// Debug-asserts that `range` is writable.
///
/// # Examples
/// ```
/// use kernel::memory::{self, MemoryRange};
///
/// let mut buf = [0u8; 16];
/// let range = MemoryRange::of_mut_slice(&mut buf);
/// let base = unsafe { memory::fill(range, 0xAA) };
/// assert_eq!(base, range.base());
/// assert!(buf.iter().all(|&b| b == 0xAA));
/// ```
pub unsafe fn fill(range: MemoryRange, value: u8) -> usize {
    debug_assert!(
        range.is_writable() || range.is_empty(),
        "fill into a non-writable range"
    );

    let dst = range.as_mut_ptr();
    let mut i = 0;
    while i < range.len() {
        // SAFETY: caller guarantees `range` is valid for writes; `i` stays
        // below the declared length, and the range invariant rules out
        // address wrap-around.
        unsafe { ptr::write_volatile(dst.add(i), value) };
        i += 1;
    }
    range.base()
}

/// Copies `len` bytes from `src` to `dst`, ascending. Returns `dst.base()`.
///
/// `len == 0` is a no-op. This is the narrow, non-overlap-safe copy (the
/// memcpy contract, not memmove): if the ranges alias, the result is
/// unspecified. Use [`try_copy`] to have overlap detected instead.
///
/// # Safety
/// - `dst` must be valid for writes and `src` valid for reads, each for at
///   least `len` bytes, with no concurrent access to either.
/// - `dst` and `src` must not overlap.
/// - `len` must not exceed either range's declared length.
///
/// # Panics
/// Debug-asserts the bounds, the non-overlap precondition, and that `dst`
/// is writable.
pub unsafe fn copy(dst: MemoryRange, src: MemoryRange, len: usize) -> usize {
    debug_assert!(len <= dst.len(), "copy length exceeds destination range");
    debug_assert!(len <= src.len(), "copy length exceeds source range");
    debug_assert!(!dst.overlaps(src), "copy ranges overlap");
    debug_assert!(dst.is_writable() || len == 0, "copy into a non-writable range");

    let d = dst.as_mut_ptr();
    let s = src.as_ptr();
    let mut i = 0;
    while i < len {
        // SAFETY: caller guarantees both ranges are valid for `len` bytes
        // and disjoint; `i < len` bounds both accesses.
        unsafe { ptr::write_volatile(d.add(i), ptr::read_volatile(s.add(i))) };
        i += 1;
    }
    dst.base()
}

/// Checked [`fill`]: validates writability before touching memory.
///
/// # Errors
/// [`MemoryError::ReadOnly`] if `range` is non-empty and lacks
/// [`RangeFlags::WRITE`](super::RangeFlags::WRITE).
///
/// # Safety
/// As for [`fill`]: the described memory must actually be valid for writes.
/// The check covers the range's declared flags, not the mapping behind it.
pub unsafe fn try_fill(range: MemoryRange, value: u8) -> Result<usize, MemoryError> {
    if range.is_empty() {
        return Ok(range.base());
    }
    if !range.is_writable() {
        return Err(MemoryError::ReadOnly);
    }
    // SAFETY: forwarded from the caller.
    Ok(unsafe { fill(range, value) })
}

/// Checked [`copy`]: validates bounds, overlap, and writability.
///
/// # Errors
/// - [`MemoryError::OutOfBounds`] if `len` exceeds either range's length.
/// - [`MemoryError::Overlap`] if the ranges share an address.
/// - [`MemoryError::ReadOnly`] if `dst` lacks write access.
///
/// # Safety
/// As for [`copy`], minus the preconditions the checks take over: the
/// caller still guarantees the described memory is real and unaliased by
/// anyone else for the duration of the call.
pub unsafe fn try_copy(
    dst: MemoryRange,
    src: MemoryRange,
    len: usize,
) -> Result<usize, MemoryError> {
    if len == 0 {
        return Ok(dst.base());
    }
    if len > dst.len() {
        return Err(MemoryError::OutOfBounds {
            requested: len,
            available: dst.len(),
        });
    }
    if len > src.len() {
        return Err(MemoryError::OutOfBounds {
            requested: len,
            available: src.len(),
        });
    }
    if dst.overlaps(src) {
        return Err(MemoryError::Overlap);
    }
    if !dst.is_writable() {
        return Err(MemoryError::ReadOnly);
    }
    // SAFETY: bounds and overlap verified above; validity of the described
    // memory is forwarded from the caller.
    Ok(unsafe { copy(dst, src, len) })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::super::range::RangeFlags;
    use super::*;

    #[test]
    fn fill_sets_every_byte_and_returns_base() {
        let mut buf = [0u8; 16];
        let range = MemoryRange::of_mut_slice(&mut buf);
        let base = unsafe { fill(range, 0xAA) };
        assert_eq!(base, range.base());
        assert_eq!(buf, [0xAA; 16]);
    }

    #[test]
    fn fill_zero_length_changes_nothing() {
        let mut buf = [0x11u8; 8];
        let base = buf.as_mut_ptr() as usize;
        let empty = MemoryRange::new(base, 0, RangeFlags::RW);
        let returned = unsafe { fill(empty, 0xFF) };
        assert_eq!(returned, base);
        assert_eq!(buf, [0x11; 8]);
    }

    #[test]
    fn copy_moves_bytes_and_preserves_source() {
        let src_buf = [1u8, 2, 3, 4];
        let mut dst_buf = [0u8; 4];
        let src = MemoryRange::of_slice(&src_buf);
        let dst = MemoryRange::of_mut_slice(&mut dst_buf);
        let base = unsafe { copy(dst, src, 4) };
        assert_eq!(base, dst.base());
        assert_eq!(dst_buf, [1, 2, 3, 4]);
        assert_eq!(src_buf, [1, 2, 3, 4]);
    }

    #[test]
    fn copy_zero_length_is_a_noop() {
        let src_buf = [9u8; 4];
        let mut dst_buf = [7u8; 4];
        let src = MemoryRange::of_slice(&src_buf);
        let dst = MemoryRange::of_mut_slice(&mut dst_buf);
        unsafe { copy(dst, src, 0) };
        assert_eq!(dst_buf, [7; 4]);
    }

    #[test]
    fn try_copy_rejects_out_of_bounds_lengths() {
        let src_buf = [0u8; 4];
        let mut dst_buf = [0u8; 8];
        let src = MemoryRange::of_slice(&src_buf);
        let dst = MemoryRange::of_mut_slice(&mut dst_buf);

        // Longer than the source's declared length.
        assert_eq!(
            unsafe { try_copy(dst, src, 6) },
            Err(MemoryError::OutOfBounds {
                requested: 6,
                available: 4
            })
        );

        // Longer than the destination's declared length.
        assert_eq!(
            unsafe { try_copy(src, dst, 6) },
            Err(MemoryError::OutOfBounds {
                requested: 6,
                available: 4
            })
        );
    }

    #[test]
    fn try_copy_rejects_overlap() {
        let mut buf = [0u8; 16];
        let base = buf.as_mut_ptr() as usize;
        let lo = MemoryRange::new(base, 8, RangeFlags::RW);
        let hi = MemoryRange::new(base + 4, 8, RangeFlags::RW);
        assert_eq!(unsafe { try_copy(lo, hi, 8) }, Err(MemoryError::Overlap));
    }

    #[test]
    fn try_copy_rejects_read_only_destination() {
        let src_buf = [1u8; 4];
        let dst_buf = [0u8; 4];
        let src = MemoryRange::of_slice(&src_buf);
        let dst = MemoryRange::of_slice(&dst_buf); // READ only
        assert_eq!(unsafe { try_copy(dst, src, 4) }, Err(MemoryError::ReadOnly));
    }

    #[test]
    fn try_copy_happy_path() {
        let src_buf = [0xDEu8, 0xAD, 0xBE, 0xEF];
        let mut dst_buf = [0u8; 4];
        let src = MemoryRange::of_slice(&src_buf);
        let dst = MemoryRange::of_mut_slice(&mut dst_buf);
        assert_eq!(unsafe { try_copy(dst, src, 4) }, Ok(dst.base()));
        assert_eq!(dst_buf, src_buf);
    }

    #[test]
    fn try_fill_rejects_read_only_range() {
        let buf = [0u8; 4];
        let ro = MemoryRange::of_slice(&buf);
        assert_eq!(unsafe { try_fill(ro, 0xFF) }, Err(MemoryError::ReadOnly));
        assert_eq!(buf, [0; 4]);
    }

    #[test]
    fn try_fill_zero_length_succeeds_even_read_only() {
        let buf = [0u8; 4];
        let base = buf.as_ptr() as usize;
        let empty = MemoryRange::new(base, 0, RangeFlags::READ);
        assert_eq!(unsafe { try_fill(empty, 0xFF) }, Ok(base));
    }
}
