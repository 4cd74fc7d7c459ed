use crate::log::log_level::LogLevel;

/// Platform fallback channel used when no sink is installed.
///
/// The logger core only depends on this trait; which implementation backs a
/// logger is chosen at compile time through its type parameter.
pub trait LineWriter {
    /// Writes one finished line. The level is passed along for writers that
    /// decorate output (e.g. with colors); the line already carries its label.
    fn write_line(&self, level: LogLevel, line: &str);
}
