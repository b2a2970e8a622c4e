//! Captures `log` records so tests can check what was logged.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

/// Route the `log` facade into the capture buffer. Safe to call from every
/// test; only the first call installs.
pub(crate) fn capture_logs() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Whether a record at `level` containing `needle` has been logged. Tests run
/// in parallel, so needles should be unique to the test.
pub(crate) fn logged(level: Level, needle: &str) -> bool {
    LOGGER
        .records
        .lock()
        .map(|records| records.iter().any(|(l, m)| *l == level && m.contains(needle)))
        .unwrap_or(false)
}
