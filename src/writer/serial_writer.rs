use crate::{log::log_level::LogLevel, writer::line_writer::LineWriter};

/// Line terminator expected by serial terminals.
pub const SERIAL_LINE_END: &[u8] = b"\r\n";

/// Byte-oriented transmit side of a UART or USB-CDC port.
///
/// Implementations are expected to block until the bytes are queued in
/// hardware; the logger treats the write as synchronous.
pub trait SerialPort {
    fn write_bytes(&self, bytes: &[u8]);
}

impl<F> SerialPort for F
where
    F: Fn(&[u8]),
{
    #[inline]
    fn write_bytes(&self, bytes: &[u8]) {
        self(bytes);
    }
}

/// Default writer for microcontrollers: one `\r\n`-terminated line per call,
/// never colored.
#[derive(Debug, Clone, Copy)]
pub struct SerialWriter<P> {
    port: P,
}

impl<P: SerialPort> SerialWriter<P> {
    pub const fn new(port: P) -> Self {
        Self { port }
    }

    pub fn port(&self) -> &P {
        &self.port
    }
}

impl<P: SerialPort> LineWriter for SerialWriter<P> {
    fn write_line(&self, _level: LogLevel, line: &str) {
        self.port.write_bytes(line.as_bytes());
        self.port.write_bytes(SERIAL_LINE_END);
    }
}
