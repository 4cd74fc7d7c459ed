pub mod line_writer;
pub mod serial_writer;

#[cfg(feature = "std")]
pub mod console_writer;

#[cfg(feature = "std")]
pub use console_writer::ConsoleWriter;
pub use line_writer::LineWriter;
pub use serial_writer::{SerialPort, SerialWriter};
