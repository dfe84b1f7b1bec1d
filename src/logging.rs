#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Initialize logging with a level taken from the `NUMBER_GUESS_LOG` environment variable.
/// Falls back to `info` if the variable is not set or invalid. The binaries use
/// [`init_logging_with`] and fall back to `warn` instead.
pub fn init_logging() {
    init_logging_with(LevelFilter::Info);
}

/// Like [`init_logging`], but falling back to `default` when `NUMBER_GUESS_LOG`
/// is not set or invalid.
pub fn init_logging_with(default: LevelFilter) {
    let level = level_from(env::var("NUMBER_GUESS_LOG").ok().as_deref(), default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

fn level_from(var: Option<&str>, default: LevelFilter) -> LevelFilter {
    var.and_then(|lvl| lvl.parse().ok()).unwrap_or(default)
}
