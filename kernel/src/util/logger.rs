// =============================================================================
// OpenEdir — Kernel Logger
// =============================================================================
//
// Formatted diagnostics for the kernel, behind the standard `log` facade.
// Subsystems call `log::info!` and friends; this module owns the single
// global logger that turns records into text.
//
// WHERE THE TEXT GOES:
//   The logger does not know. Output is an injected Sink — the serial
//   driver during bring-up, the framebuffer console later, a plain String
//   in host tests. The hardware stays outside this crate; the sink handle
//   comes in through init().
//
// THREAD SAFETY:
//   The sink handle sits behind a spin::Mutex. Each record is formatted
//   and written while the lock is held, so a record is emitted atomically
//   and never interleaves with another. Ordering between contexts is
//   whatever the lock hands out.
//
// =============================================================================

use core::fmt::{self, Write};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use spin::Mutex;

/// A destination for log text.
///
/// Implementors take `&self` because sinks are shared, long-lived handles;
/// a hardware-backed sink serializes internally (the serial driver already
/// owns a lock on its port).
pub trait Sink: Send + Sync {
    /// Appends `s` to the sink's output.
    fn write_str(&self, s: &str);
}

/// Adapter giving a `&dyn Sink` the `core::fmt::Write` interface that
/// `write!` needs.
struct SinkWriter<'a>(&'a dyn Sink);

impl fmt::Write for SinkWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s);
        Ok(())
    }
}

/// Width-padded level tag, so columns line up in the boot transcript.
fn level_tag(level: log::Level) -> &'static str {
    match level {
        log::Level::Trace => "TRACE",
        log::Level::Debug => "DEBUG",
        log::Level::Info => " INFO",
        log::Level::Warn => " WARN",
        log::Level::Error => "ERROR",
    }
}

/// The global logger: a sink handle plus the `log::Log` plumbing.
struct KernelLogger {
    sink: Mutex<Option<&'static dyn Sink>>,
}

static LOGGER: KernelLogger = KernelLogger {
    sink: Mutex::new(None),
};

impl Log for KernelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let guard = self.sink.lock();
        if let Some(sink) = *guard {
            let mut writer = SinkWriter(sink);
            // The sink cannot fail (see Sink::write_str), so neither can this.
            let _ = write!(
                writer,
                "[{}] {}: {}\n",
                level_tag(record.level()),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Installs `sink` as the log destination and registers the kernel logger.
///
/// Call once during early boot, before anything logs. Records below
/// `level` are discarded at the facade, costing nothing.
///
/// # Errors
/// [`SetLoggerError`] if a logger was already registered.
pub fn init(sink: &'static dyn Sink, level: LevelFilter) -> Result<(), SetLoggerError> {
    *LOGGER.sink.lock() = Some(sink);
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test sink capturing output into a plain String.
    struct BufSink(std::sync::Mutex<String>);

    impl Sink for BufSink {
        fn write_str(&self, s: &str) {
            self.0.lock().unwrap().push_str(s);
        }
    }

    static SINK: BufSink = BufSink(std::sync::Mutex::new(String::new()));

    // One test only: the `log` crate allows a single registration per
    // process, and unit tests share one.
    #[test]
    fn records_reach_the_sink_formatted_and_filtered() {
        init(&SINK, LevelFilter::Info).unwrap();

        log::info!(target: "boot", "hello from {}", "OpenEdir");
        log::debug!(target: "boot", "should be filtered out");
        log::warn!(target: "mem", "range check");

        let out = SINK.0.lock().unwrap().clone();
        assert!(out.contains("[ INFO] boot: hello from OpenEdir\n"), "got: {out:?}");
        assert!(out.contains("[ WARN] mem: range check\n"), "got: {out:?}");
        assert!(!out.contains("filtered out"));

        // Second registration is refused by the facade.
        assert!(init(&SINK, LevelFilter::Info).is_err());
    }
}
