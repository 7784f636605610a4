// =============================================================================
// OpenEdir — Kernel Core
// =============================================================================
//
// The hardened core of the OpenEdir bootstrap. The first C cut of the
// kernel had exactly two pieces of real machinery — a busy-wait delay and a
// pair of byte-loop memory routines — and this crate is those two pieces
// grown into properly specified, independently testable components:
//
//   time    — TimerDelay: a calibrated busy-wait plus a monotonic-tick
//             variant behind a common DelaySource trait
//   memory  — RawMemory: fill/copy over explicit (base, length) ranges,
//             unchecked fast paths and checked variants
//
// Everything else from the bootstrap (VGA console, multiboot parsing, the
// boot entry loop) lives outside this crate and consumes it as a leaf.
//
// BUILD MODES:
//   - Host (default): `#![no_std]` is lifted under `cfg(test)` so the unit
//     tests run with the standard library on the build machine. No hardware
//     is touched; the primitives operate on caller-supplied ranges.
//   - Freestanding (`--features freestanding`): installs the panic handler
//     and exports the C-ABI memset/memcpy symbols the compiler expects.
//
// =============================================================================

#![cfg_attr(not(test), no_std)]

/// Architecture-specific helpers (spin-loop relax, fatal halt).
pub mod arch;

/// Raw memory primitives: ranges, fill, copy.
pub mod memory;

/// Timer delay facility: busy-wait and tick-polling delay sources.
pub mod time;

/// Kernel utility modules: logging, panic handling.
pub mod util;

pub use memory::{MemoryError, MemoryRange, RangeFlags};
pub use time::{DelaySource, SpinDelay, TickClock, TickDelay};
