//! `portlog` is a fixed-buffer logging facade that runs unmodified on
//! microcontrollers and on hosted operating systems.
//!
//! Each call formats `[LEVEL] message` into a stack buffer whose size is a
//! const generic, then hands the finished line to exactly one destination:
//! an installed sink callback, or the platform default writer (stdout on
//! hosted targets, a serial port on bare metal).
//!
//! Without the default `std` feature the crate is `no_std` and allocation-free.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

/// Configuration of the hosted console writer.
#[cfg(feature = "std")]
pub mod config;
/// Process-wide logger for hosted builds.
#[cfg(feature = "std")]
pub mod global;
/// Levels, sinks, the logger itself and its macros.
pub mod log;
/// Default writers used when no sink is installed.
pub mod writer;

#[cfg(feature = "std")]
pub use config::{ColorMode, ConfigError, ConsoleConfig};
#[cfg(feature = "std")]
pub use global::{clear_sink, global, log, log_fmt, set_sink};
#[cfg(feature = "log-bridge")]
pub use crate::log::log_bridge::install_log_bridge;
#[cfg(feature = "std")]
pub use crate::log::log_sink::sink;
#[cfg(feature = "std")]
pub use crate::log::logger::ConsoleLogger;
#[cfg(feature = "std")]
pub use writer::ConsoleWriter;
pub use crate::log::{
    NoopLogSink,
    log_level::{LogLevel, color_for_raw, label_for_raw},
    log_sink::{LogSink, SinkRef},
    logger::{
        DEFAULT_CAPACITY, FORMAT_ERROR_MSG, Logger, MIN_CAPACITY, SerialLogger, TRUNCATED_MSG,
    },
};
pub use writer::{LineWriter, SerialPort, SerialWriter};
