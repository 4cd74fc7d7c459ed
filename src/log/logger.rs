use core::fmt;

use crate::{
    log::{
        line_buffer::{LineBuffer, prefixed_line},
        log_level::LogLevel,
        log_sink::SinkRef,
        sink_slot::SinkSlot,
    },
    writer::line_writer::LineWriter,
};

#[cfg(feature = "std")]
use crate::writer::console_writer::ConsoleWriter;
use crate::writer::serial_writer::SerialWriter;

/// Reported instead of a message whose arguments failed to format.
pub const FORMAT_ERROR_MSG: &str = "Format error in log message";

/// Reported before a message that had to be clipped to fit the buffer.
pub const TRUNCATED_MSG: &str = "Log message truncated";

/// Smallest buffer capacity that still fits every internal diagnostic line,
/// terminator slot included.
pub const MIN_CAPACITY: usize = LogLevel::Error.prefix_len() + FORMAT_ERROR_MSG.len() + 1;

/// Capacity used by the global logger.
pub const DEFAULT_CAPACITY: usize = 256;

/// Logger writing to stdout when no sink is installed.
#[cfg(feature = "std")]
pub type ConsoleLogger<const N: usize> = Logger<N, ConsoleWriter>;

/// Logger writing to a serial port when no sink is installed.
pub type SerialLogger<const N: usize, P> = Logger<N, SerialWriter<P>>;

/// Fixed-buffer leveled logger.
///
/// Every line is assembled as `[LABEL] text` in a stack buffer of `N` bytes
/// and handed to exactly one destination: the installed sink if there is one,
/// the default writer `W` otherwise. One byte of `N` is kept as terminator
/// slot, so delivered lines are at most `N - 1` bytes long.
///
/// On hosted targets a mutex is held for the whole format-and-dispatch
/// sequence, so concurrent lines never interleave and a sink replacement is
/// observed atomically. Bare-metal builds take no lock.
///
/// Loggers are `const`-constructible and meant to live in a `static`:
///
/// ```
/// use portlog::{LogLevel, Logger, SerialLogger, SerialWriter};
///
/// fn uart_write(bytes: &[u8]) {
///     let _ = bytes;
/// }
///
/// static LOG: SerialLogger<128, fn(&[u8])> =
///     Logger::new(SerialWriter::new(uart_write as fn(&[u8])));
///
/// LOG.log(LogLevel::Info, "ready");
/// LOG.log_fmt(LogLevel::Debug, format_args!("answer = {}", 42));
/// ```
pub struct Logger<const N: usize, W> {
    sink: SinkSlot,
    writer: W,
}

impl<const N: usize, W: LineWriter> Logger<N, W> {
    /// Creates a logger with no sink installed.
    pub const fn new(writer: W) -> Self {
        const {
            assert!(
                N >= MIN_CAPACITY,
                "buffer capacity too small for internal diagnostics"
            )
        };
        Self {
            sink: SinkSlot::new(),
            writer,
        }
    }

    /// Buffer capacity in bytes, terminator slot included.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Default writer used while no sink is installed.
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Emits `[LABEL] text` at `level`.
    ///
    /// `None` is the absent message and does nothing. A line that would not
    /// fit in the buffer is dropped silently rather than partially written.
    pub fn log<'a>(&self, level: LogLevel, text: impl Into<Option<&'a str>>) {
        let Some(text) = text.into() else {
            return;
        };

        self.sink.with(|sink| {
            let Some(line) = prefixed_line::<N>(level.label(), text) else {
                return;
            };
            match sink {
                Some(sink) => sink.log(line.as_str()),
                None => self.writer.write_line(level, line.as_str()),
            }
        });
    }

    /// Emits a formatted message at `level`.
    ///
    /// Arguments are rendered into a stage buffer sized to what remains after
    /// the level prefix. If rendering fails, a single ERROR line reporting the
    /// format error replaces the message. If it does not fit, an ERROR line
    /// reporting the truncation is emitted first, followed by the clipped
    /// message.
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        // Fast path: no placeholders to substitute.
        if let Some(text) = args.as_str() {
            if text.len() <= Self::budget(level) {
                self.log(level, text);
                return;
            }
        }

        let mut stage = LineBuffer::<N>::with_limit(Self::budget(level));
        if stage.render(args).is_err() {
            self.log(LogLevel::Error, FORMAT_ERROR_MSG);
            return;
        }
        if stage.is_truncated() {
            self.log(LogLevel::Error, TRUNCATED_MSG);
        }
        self.log(level, stage.as_str());
    }

    /// Installs `candidate` as the sink, replacing the previous one.
    ///
    /// `None` leaves the current sink in place; use [`clear_sink`](Self::clear_sink)
    /// to go back to the default writer.
    pub fn set_sink(&self, candidate: Option<SinkRef>) {
        if let Some(sink) = candidate {
            self.sink.replace(Some(sink));
        }
    }

    /// Removes the installed sink; later lines go to the default writer.
    pub fn clear_sink(&self) {
        self.sink.replace(None);
    }

    /// Whether a sink is installed, i.e. whether lines bypass the default writer.
    #[must_use]
    pub fn has_sink(&self) -> bool {
        self.sink.is_set()
    }

    /// Largest message body that still fits behind the prefix of `level`.
    const fn budget(level: LogLevel) -> usize {
        N - 1 - level.prefix_len()
    }
}

#[cfg(feature = "std")]
impl<const N: usize> Default for Logger<N, ConsoleWriter> {
    fn default() -> Self {
        Self::new(ConsoleWriter::new())
    }
}

impl<const N: usize, W> fmt::Debug for Logger<N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("capacity", &N)
            .field("has_sink", &self.sink.is_set())
            .finish_non_exhaustive()
    }
}
