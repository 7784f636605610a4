// =============================================================================
// OpenEdir — Monotonic Tick Clock and Tick-Polling Delay
// =============================================================================
//
// The hardware-backed replacement for SpinDelay. Once a timer (PIT, HPET,
// LAPIC — whichever the platform layer programs) fires periodic interrupts,
// its handler advances a TickClock, and a TickDelay polls that clock until
// the deadline tick passes. Accuracy then comes from the timer hardware,
// not from a guessed instruction rate.
//
// The clock is an injected handle, not ambient global state: whoever owns
// the interrupt wiring owns the TickClock and hands references to anyone
// who needs to wait on it. That keeps this module free of hardware
// knowledge and testable by ticking the clock from ordinary code.
//
// =============================================================================

use core::sync::atomic::{AtomicU64, Ordering};

use crate::arch;

use super::DelaySource;

/// A monotonically increasing tick counter.
///
/// `tick()` is meant to be called from exactly one place — the timer
/// interrupt handler — and `now()` from anywhere. Relaxed ordering is
/// sufficient: the counter carries no other data and only ever grows.
#[derive(Debug)]
pub struct TickClock {
    ticks: AtomicU64,
}

impl TickClock {
    /// A clock starting at tick zero.
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU64::new(0),
        }
    }

    /// Advances the clock by one tick. Called on every timer interrupt.
    #[inline]
    pub fn tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// The current tick count.
    #[inline]
    pub fn now(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`DelaySource`] that polls an injected [`TickClock`].
///
/// `ticks_per_ms` converts the clock's tick rate to milliseconds; a timer
/// programmed at 1 kHz uses `1`.
pub struct TickDelay<'a> {
    clock: &'a TickClock,
    ticks_per_ms: u64,
}

impl<'a> TickDelay<'a> {
    /// A delay polling `clock`, which advances `ticks_per_ms` times per
    /// millisecond.
    pub const fn new(clock: &'a TickClock, ticks_per_ms: u64) -> Self {
        Self {
            clock,
            ticks_per_ms,
        }
    }

    /// Blocks until the clock has advanced `ms` milliseconds' worth of
    /// ticks past the point of call. `ms == 0` returns immediately.
    pub fn delay(&self, ms: u64) {
        if ms == 0 {
            return;
        }

        let start = self.clock.now();
        let target = start.saturating_add(ms.saturating_mul(self.ticks_per_ms));
        while self.clock.now() < target {
            arch::relax();
        }
    }
}

impl DelaySource for TickDelay<'_> {
    fn delay(&self, ms: u64) {
        TickDelay::delay(self, ms)
    }
}

// =============================================================================
// Tests
// =============================================================================
