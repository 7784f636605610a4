// =============================================================================
// OpenEdir — Calibrated Busy-Wait Delay
// =============================================================================
//
// The pre-timer delay: spin through a counted loop of NOPs at an assumed
// instruction-execution rate. The C bootstrap hardcoded
// `milliseconds * 10000` iterations inline; here the constant is a named
// calibration parameter on the SpinDelay value so a differently-clocked
// machine (or a calibration routine run at boot) can supply its own without
// touching any caller.
//
// KNOWN LIMITATION: the default constant is inherited from the C
// bootstrap and was never measured against real hardware. It is wrong on
// almost every machine, in an unknown direction. Treat SpinDelay as "roughly
// this long, never instant" — anything needing real accuracy should be
// handed a TickDelay backed by a programmed hardware timer.
//
// =============================================================================

use crate::arch;

use super::DelaySource;

/// A busy-wait delay calibrated by a loop-iterations-per-millisecond constant.
///
/// # Examples
/// ```
/// use kernel::time::{DelaySource, SpinDelay};
///
/// // A deliberately tiny calibration so the example returns promptly.
/// let delay = SpinDelay::with_calibration(10);
/// delay.delay(1);
/// delay.delay(0); // returns immediately
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinDelay {
    /// Loop iterations assumed to take one millisecond.
    iters_per_ms: u64,
}

impl SpinDelay {
    /// The C bootstrap's uncalibrated guess: 10 000 iterations/ms.
    ///
    /// Kept as the default because it is the constant the stub shipped
    /// with, not because it is accurate. See the module notes.
    pub const DEFAULT_ITERS_PER_MS: u64 = 10_000;

    /// A delay using [`Self::DEFAULT_ITERS_PER_MS`].
    pub const fn new() -> Self {
        Self::with_calibration(Self::DEFAULT_ITERS_PER_MS)
    }

    /// A delay using a caller-measured calibration constant.
    pub const fn with_calibration(iters_per_ms: u64) -> Self {
        Self { iters_per_ms }
    }

    /// The calibration constant in use.
    pub const fn iters_per_ms(self) -> u64 {
        self.iters_per_ms
    }

    /// Total loop iterations for an `ms` millisecond request.
    ///
    /// Saturates instead of wrapping: an absurd request spins for a very
    /// long time rather than for a surprisingly short one.
    pub const fn iters_for(self, ms: u64) -> u64 {
        ms.saturating_mul(self.iters_per_ms)
    }

    /// Blocks for at least `ms` milliseconds at the calibrated rate.
    ///
    /// `ms == 0` returns without entering the loop. The loop counter is
    /// read and written through volatile accesses so the optimizer cannot
    /// prove the loop effect-free and delete it — the moral equivalent of
    /// the C stub's `volatile uint32_t i`.
    pub fn delay(&self, ms: u64) {
        if ms == 0 {
            return;
        }

        let total = self.iters_for(ms);
        let mut counter: u64 = 0;
        loop {
            // SAFETY: `counter` is a live local; volatile access to it is
            // always valid and merely opts out of optimization.
            let current = unsafe { core::ptr::read_volatile(&counter) };
            if current >= total {
                break;
            }
            unsafe { core::ptr::write_volatile(&mut counter, current + 1) };
            arch::relax();
        }
    }
}

impl DelaySource for SpinDelay {
    fn delay(&self, ms: u64) {
        SpinDelay::delay(self, ms)
    }
}

impl Default for SpinDelay {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
//
// Wall-clock lower bounds depend on the calibration constant matching the
// host, which it deliberately does not. The tests pin down the arithmetic
// and the zero-duration contract instead.
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn iteration_budget_arithmetic() {
        let d = SpinDelay::with_calibration(10_000);
        assert_eq!(d.iters_for(0), 0);
        assert_eq!(d.iters_for(1), 10_000);
        assert_eq!(d.iters_for(500), 5_000_000);
    }

    #[test]
    fn iteration_budget_saturates() {
        let d = SpinDelay::with_calibration(u64::MAX);
        assert_eq!(d.iters_for(2), u64::MAX);
    }

    #[test]
    fn zero_duration_returns_immediately() {
        // Even with the largest possible calibration, ms == 0 must not
        // enter the loop at all. Bound it loosely by wall clock.
        let d = SpinDelay::with_calibration(u64::MAX);
        let start = Instant::now();
        d.delay(0);
        assert!(start.elapsed().as_millis() < 100);
    }

    #[test]
    fn nonzero_duration_completes_and_elapsed_is_nonnegative() {
        let d = SpinDelay::with_calibration(100);
        let start = Instant::now();
        d.delay(5);
        // Instant is monotonic; this is the "never negative" property.
        let _ = start.elapsed();
    }

    #[test]
    fn usable_through_the_trait_object() {
        let d = SpinDelay::with_calibration(1);
        let source: &dyn DelaySource = &d;
        source.delay(1);
    }

    #[test]
    fn default_uses_the_documented_constant() {
        assert_eq!(
            SpinDelay::default().iters_per_ms(),
            SpinDelay::DEFAULT_ITERS_PER_MS
        );
    }
}
