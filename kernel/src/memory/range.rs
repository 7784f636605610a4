// =============================================================================
// OpenEdir — Memory Ranges
// =============================================================================
//
// The original bootstrap passed bare `void*` pointers into memset/memcpy and
// trusted every caller to keep the length in their head. That is how kernels
// corrupt memory: the pointer survives, the bounds don't.
//
// SOLUTION: carry the bounds with the address.
//   A MemoryRange is an explicit (base, length) pair plus access flags. The
//   raw primitives in `raw.rs` take ranges, not pointers, so a checked
//   variant can validate lengths and overlap without changing the shape of
//   the unchecked fast path.
//
// A range describes memory; it does not own it and it is never retained
// beyond the call it is passed to. Constructing a range performs no memory
// access at all — only the fill/copy primitives dereference, and those are
// `unsafe` with the validity contract documented on each.
//
// =============================================================================

use core::fmt;

bitflags::bitflags! {
    /// Access flags carried by a [`MemoryRange`].
    ///
    /// The checked primitives consult `WRITE` before storing through a
    /// range; the unchecked ones only debug-assert it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RangeFlags: u8 {
        /// The range may be read from.
        const READ = 1 << 0;
        /// The range may be written to.
        const WRITE = 1 << 1;
    }
}

impl RangeFlags {
    /// Both READ and WRITE.
    pub const RW: RangeFlags = RangeFlags::READ.union(RangeFlags::WRITE);
}

/// Errors reported by the checked memory primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// `base + len` would wrap around the address space.
    AddressOverflow,
    /// A requested length exceeds a range's declared length.
    OutOfBounds {
        /// Bytes the caller asked for.
        requested: usize,
        /// Bytes the range actually declares.
        available: usize,
    },
    /// Source and destination ranges share at least one address.
    Overlap,
    /// The destination range does not carry [`RangeFlags::WRITE`].
    ReadOnly,
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::AddressOverflow => {
                write!(f, "range end overflows the address space")
            }
            MemoryError::OutOfBounds {
                requested,
                available,
            } => {
                write!(
                    f,
                    "length {} exceeds range length {}",
                    requested, available
                )
            }
            MemoryError::Overlap => write!(f, "source and destination ranges overlap"),
            MemoryError::ReadOnly => write!(f, "destination range is not writable"),
        }
    }
}

// =============================================================================
// MemoryRange — a contiguous span of addresses with explicit bounds
// =============================================================================

/// A contiguous span of memory addresses: base, length, access flags.
///
/// Invariants:
///   - `base + len` does not overflow the address space. [`MemoryRange::new`]
///     debug-asserts this; [`MemoryRange::try_new`] reports it as
///     [`MemoryError::AddressOverflow`].
///   - A zero-length range is valid. Every primitive treats it as a no-op.
///
/// # Examples
/// ```
/// use kernel::memory::{MemoryRange, RangeFlags};
///
/// let r = MemoryRange::new(0x1000, 16, RangeFlags::RW);
/// assert_eq!(r.base(), 0x1000);
/// assert_eq!(r.end(), 0x1010);
/// assert!(!r.is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MemoryRange {
    base: usize,
    len: usize,
    flags: RangeFlags,
}

impl MemoryRange {
    /// Creates a new range over `[base, base + len)`.
    ///
    /// # Panics
    /// Debug-asserts that `base + len` does not overflow. Use
    /// [`MemoryRange::try_new`] when the inputs are not trusted.
    #[inline]
    pub const fn new(base: usize, len: usize, flags: RangeFlags) -> Self {
        debug_assert!(
            base.checked_add(len).is_some(),
            "MemoryRange end overflows the address space"
        );
        Self { base, len, flags }
    }

    /// Creates a new range, rejecting address-space overflow.
    ///
    /// # Examples
    /// ```
    /// use kernel::memory::{MemoryError, MemoryRange, RangeFlags};
    ///
    /// let bad = MemoryRange::try_new(usize::MAX, 2, RangeFlags::READ);
    /// assert_eq!(bad.unwrap_err(), MemoryError::AddressOverflow);
    /// ```
    #[inline]
    pub const fn try_new(
        base: usize,
        len: usize,
        flags: RangeFlags,
    ) -> Result<Self, MemoryError> {
        if base.checked_add(len).is_none() {
            return Err(MemoryError::AddressOverflow);
        }
        Ok(Self { base, len, flags })
    }

    /// A read-only range covering an existing byte slice.
    ///
    /// This is the bridge from safe Rust into the primitives: the slice's
    /// own bounds become the range's bounds.
    #[inline]
    pub fn of_slice(bytes: &[u8]) -> Self {
        Self {
            base: bytes.as_ptr() as usize,
            len: bytes.len(),
            flags: RangeFlags::READ,
        }
    }

    /// A read-write range covering an existing mutable byte slice.
    #[inline]
    pub fn of_mut_slice(bytes: &mut [u8]) -> Self {
        Self {
            base: bytes.as_mut_ptr() as usize,
            len: bytes.len(),
            flags: RangeFlags::RW,
        }
    }

    /// The first address of the range.
    #[inline]
    pub const fn base(self) -> usize {
        self.base
    }

    /// The number of bytes the range declares.
    #[inline]
    pub const fn len(self) -> usize {
        self.len
    }

    /// One past the last address of the range (`base + len`).
    #[inline]
    pub const fn end(self) -> usize {
        self.base + self.len
    }

    /// True for a zero-length range.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// The range's access flags.
    #[inline]
    pub const fn flags(self) -> RangeFlags {
        self.flags
    }

    /// True if the range carries [`RangeFlags::WRITE`].
    #[inline]
    pub const fn is_writable(self) -> bool {
        self.flags.contains(RangeFlags::WRITE)
    }

    /// True if `self` and `other` share at least one address.
    ///
    /// Zero-length ranges overlap nothing, including themselves.
    #[inline]
    pub const fn overlaps(self, other: MemoryRange) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.base < other.end() && other.base < self.end()
    }

    /// The base as a const pointer, for the read side of a primitive.
    #[inline]
    pub const fn as_ptr(self) -> *const u8 {
        self.base as *const u8
    }

    /// The base as a mut pointer, for the write side of a primitive.
    #[inline]
    pub const fn as_mut_ptr(self) -> *mut u8 {
        self.base as *mut u8
    }
}

/// Display a range as `base..end (len bytes, flags)`.
impl fmt::Debug for MemoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#X}..{:#X} ({} bytes, {:?})",
            self.base,
            self.end(),
            self.len,
            self.flags
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_accessors() {
        let r = MemoryRange::new(0x1000, 16, RangeFlags::RW);
        assert_eq!(r.base(), 0x1000);
        assert_eq!(r.len(), 16);
        assert_eq!(r.end(), 0x1010);
        assert!(r.is_writable());
        assert!(!r.is_empty());
    }

    #[test]
    fn try_new_rejects_overflow() {
        assert_eq!(
            MemoryRange::try_new(usize::MAX, 1, RangeFlags::READ),
            Err(MemoryError::AddressOverflow)
        );
        // The very last byte of the address space is still representable.
        assert!(MemoryRange::try_new(usize::MAX - 1, 1, RangeFlags::READ).is_ok());
    }

    #[test]
    fn zero_length_is_valid_and_overlaps_nothing() {
        let empty = MemoryRange::new(0x1000, 0, RangeFlags::RW);
        let around = MemoryRange::new(0x0FF0, 0x100, RangeFlags::RW);
        assert!(empty.is_empty());
        assert!(!empty.overlaps(around));
        assert!(!around.overlaps(empty));
        assert!(!empty.overlaps(empty));
    }

    #[test]
    fn overlap_detection() {
        let a = MemoryRange::new(0x1000, 16, RangeFlags::RW);
        let b = MemoryRange::new(0x100F, 16, RangeFlags::RW); // last byte of a
        let c = MemoryRange::new(0x1010, 16, RangeFlags::RW); // adjacent, disjoint
        assert!(a.overlaps(b));
        assert!(b.overlaps(a));
        assert!(!a.overlaps(c));
        assert!(!c.overlaps(a));
        assert!(a.overlaps(a));
    }

    #[test]
    fn slice_bridges_carry_the_slice_bounds() {
        let mut buf = [0u8; 32];
        let base = buf.as_ptr() as usize;
        let ro = MemoryRange::of_slice(&buf);
        assert_eq!(ro.base(), base);
        assert_eq!(ro.len(), 32);
        assert!(!ro.is_writable());

        let rw = MemoryRange::of_mut_slice(&mut buf);
        assert_eq!(rw.len(), 32);
        assert!(rw.is_writable());
    }
}
