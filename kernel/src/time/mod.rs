// =============================================================================
// OpenEdir — Timer Delay Facility
// =============================================================================
//
// The bootstrap needs exactly one timing service: "block for N milliseconds".
// Before interrupts and a real timer exist, the only way to do that is to
// burn instructions at a known rate — a busy-wait. Once a hardware timer is
// programmed, the same request should be served by polling a monotonic
// counter instead.
//
// DelaySource is the seam between those two worlds. Callers hold a
// `&dyn DelaySource` (or a concrete one) and never learn which variant is
// behind it:
//
//   spin.rs — SpinDelay: calibrated instruction-burning loop. Works from
//             the first instruction of boot, accuracy is calibration-bound.
//   tick.rs — TickClock + TickDelay: monotonic counter advanced by a timer
//             interrupt, polled until the deadline passes.
//
// No delay can fail and no delay can be cancelled: the execution context is
// fully blocked until the requested time has elapsed. That is the intended
// semantics for a single-threaded, non-preemptive bootstrap.
//
// =============================================================================

mod spin;
mod tick;

pub use spin::SpinDelay;
pub use tick::{TickClock, TickDelay};

/// A blocking millisecond delay.
///
/// Implementations block the calling execution context for at least the
/// requested number of milliseconds. A request of zero returns immediately.
/// Precision above the "at least" bound is best-effort and implementation-
/// specific.
pub trait DelaySource {
    /// Blocks for at least `ms` milliseconds.
    fn delay(&self, ms: u64);
}
