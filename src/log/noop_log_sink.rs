use crate::log::log_sink::LogSink;

/// Sink that discards every line.
///
/// Installing it silences a logger without falling back to the default writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn log(&self, _line: &str) {}
}
