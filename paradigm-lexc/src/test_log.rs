//! Captures warnings so tests can check that a repair or skip was reported.
use std::sync::Mutex;

struct WarningLog;

static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static LOGGER: WarningLog = WarningLog;

impl log::Log for WarningLog {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            WARNINGS.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

pub(crate) fn init() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Warn);
}

/// Whether any warning so far contains `text`.
pub(crate) fn warned_about(text: &str) -> bool {
    WARNINGS.lock().unwrap().iter().any(|w| w.contains(text))
}
