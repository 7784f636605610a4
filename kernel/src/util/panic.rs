// =============================================================================
// OpenEdir — Kernel Panic Handler
// =============================================================================
//
// When Rust code panics in a freestanding build, this handler is called.
// A panic here means a violated invariant in the kernel itself; there is
// no process to kill and nothing to unwind (we compile with panic=abort),
// so the only honest response is: report, then stop the machine where it
// stands. A frozen CPU with a readable transcript beats a reboot loop.
//
// Only compiled under the `freestanding` feature — hosted test binaries
// get their panic machinery from std.
//
// =============================================================================

use core::panic::PanicInfo;

use crate::arch;

/// The kernel panic handler: log the location and message, halt forever.
#[cfg(not(test))]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    match info.location() {
        Some(location) => log::error!(
            target: "panic",
            "KERNEL PANIC at {}:{}: {}",
            location.file(),
            location.line(),
            info.message()
        ),
        None => log::error!(target: "panic", "KERNEL PANIC: {}", info.message()),
    }

    arch::halt_forever()
}
