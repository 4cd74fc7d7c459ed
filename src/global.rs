//! Process-wide logger for hosted builds.
//!
//! Prefer passing an explicit [`Logger`](crate::Logger) where the call site
//! allows it; the global handle exists for code that cannot thread one through.
//! It is statically initialized, so it is usable from the first line of `main`.

use core::fmt;

use crate::{
    log::{
        log_level::LogLevel,
        log_sink::SinkRef,
        logger::{ConsoleLogger, DEFAULT_CAPACITY, Logger},
    },
    writer::console_writer::ConsoleWriter,
};

static GLOBAL: ConsoleLogger<DEFAULT_CAPACITY> = Logger::new(ConsoleWriter::new());

/// The process-wide logger.
#[must_use]
pub fn global() -> &'static ConsoleLogger<DEFAULT_CAPACITY> {
    &GLOBAL
}

/// Emits `[LABEL] text` on the global logger. `None` does nothing.
pub fn log<'a>(level: LogLevel, text: impl Into<Option<&'a str>>) {
    GLOBAL.log(level, text);
}

/// Emits a formatted message on the global logger.
pub fn log_fmt(level: LogLevel, args: fmt::Arguments<'_>) {
    GLOBAL.log_fmt(level, args);
}

/// Installs a sink on the global logger. `None` keeps the current one.
pub fn set_sink(candidate: Option<SinkRef>) {
    GLOBAL.set_sink(candidate);
}

/// Sends later global lines back to stdout.
pub fn clear_sink() {
    GLOBAL.clear_sink();
}
