/// Receiver of finished log lines.
///
/// The line is a borrowed view of the logger's stack buffer; it is only valid
/// for the duration of the call and must be copied if it needs to be kept.
///
/// On hosted targets the logger holds its lock while the sink runs, so a sink
/// must not log through, or replace the sink of, the logger that called it.
pub trait LogSink: Send + Sync {
    fn log(&self, line: &str);
}

impl<F> LogSink for F
where
    F: Fn(&str) + Send + Sync,
{
    #[inline]
    fn log(&self, line: &str) {
        self(line);
    }
}

/// Shared handle to an installed sink.
#[cfg(feature = "std")]
pub type SinkRef = std::sync::Arc<dyn LogSink>;

/// Shared handle to an installed sink.
#[cfg(not(feature = "std"))]
pub type SinkRef = &'static dyn LogSink;

/// Wraps any sink into a [`SinkRef`] ready for `set_sink`.
#[cfg(feature = "std")]
#[must_use]
pub fn sink<S: LogSink + 'static>(sink: S) -> SinkRef {
    std::sync::Arc::new(sink)
}
