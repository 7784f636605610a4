// =============================================================================
// OpenEdir — Kernel Utilities
// =============================================================================
//
// Shared utilities used across the entire kernel.
// These are deliberately minimal — just the essentials.
//
//   logger.rs — the `log` facade backend over an injected output sink
//   panic.rs  — panic handler (freestanding builds only)
// =============================================================================

pub mod logger;

#[cfg(feature = "freestanding")]
pub mod panic;
