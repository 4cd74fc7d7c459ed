//! Routes records of the `log` crate facade through a [`Logger`].
//!
//! `log` has no fatal level and five ordered levels; they are folded onto
//! this crate's labels as Trace/Debug → DEBUG, Info → INFO, Warn → WARNING,
//! Error → ERROR. Filtering stays with `log::set_max_level`.

use crate::{
    log::{log_level::LogLevel, logger::Logger},
    writer::line_writer::LineWriter,
};

impl From<::log::Level> for LogLevel {
    fn from(level: ::log::Level) -> Self {
        match level {
            ::log::Level::Error => LogLevel::Error,
            ::log::Level::Warn => LogLevel::Warning,
            ::log::Level::Info => LogLevel::Info,
            ::log::Level::Debug | ::log::Level::Trace => LogLevel::Debug,
        }
    }
}

impl<const N: usize, W> ::log::Log for Logger<N, W>
where
    W: LineWriter + Send + Sync,
{
    fn enabled(&self, _metadata: &::log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &::log::Record<'_>) {
        self.log_fmt(record.level().into(), *record.args());
    }

    fn flush(&self) {}
}

/// Registers `logger` as the `log` crate's global logger.
///
/// # Errors
///
/// Returns [`::log::SetLoggerError`] if a `log` logger was already installed.
pub fn install_log_bridge<const N: usize, W>(
    logger: &'static Logger<N, W>,
    max_level: ::log::LevelFilter,
) -> Result<(), ::log::SetLoggerError>
where
    W: LineWriter + Send + Sync,
{
    ::log::set_logger(logger)?;
    ::log::set_max_level(max_level);
    Ok(())
}
