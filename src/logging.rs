#![cfg(feature = "std")]

use std::env;
use std::string::String;
use log::{self, LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

/// Writes this crate's records to stderr so they never interleave with the
/// rendered field. Records from dependencies are dropped.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("minesweeper")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// One log line: `[LEVEL module] message`, with the crate prefix stripped
/// from the module path.
pub fn format_record(record: &Record) -> String {
    let target = record.target();
    let module = target
        .strip_prefix("minesweeper::")
        .unwrap_or(target);
    format!("[{} {}] {}", record.level(), module, record.args())
}

/// Parse a level filter such as `debug` or `TRACE`, falling back to `warn`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Initialize logging with a level taken from the `MINESWEEPER_LOG`
/// environment variable. Calling it twice keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV_VAR).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
