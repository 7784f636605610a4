// =============================================================================
// OpenEdir — CPU Helpers
// =============================================================================
//
// Low-level CPU operations that don't fit in a specific subsystem.
// These are thin wrappers around single instructions; all logic lives in
// the callers.
//
// On x86_64 we go through the `x86_64` crate so the inline assembly stays
// in one audited place. On other targets (notably a host machine running
// the unit tests) we fall back to portable core hints.
//
// =============================================================================

/// One relaxation step inside a busy-wait loop.
///
/// Executes a NOP on x86_64, mirroring the C bootstrap's
/// `asm volatile ("nop")` delay body. Elsewhere this is
/// `core::hint::spin_loop()`, which lowers to the target's spin hint.
#[inline(always)]
pub fn relax() {
    #[cfg(target_arch = "x86_64")]
    x86_64::instructions::nop();

    #[cfg(not(target_arch = "x86_64"))]
    core::hint::spin_loop();
}

/// Halts the CPU in an unrecoverable state.
///
/// Disables interrupts and then halts in a loop; the CPU never wakes up.
/// Used for fatal errors (panic) where we can't continue.
///
/// This function never returns.
#[cfg(target_arch = "x86_64")]
pub fn halt_forever() -> ! {
    x86_64::instructions::interrupts::disable();
    loop {
        x86_64::instructions::hlt();
    }
}

/// Fallback for non-x86 targets: spin forever.
#[cfg(not(target_arch = "x86_64"))]
pub fn halt_forever() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
