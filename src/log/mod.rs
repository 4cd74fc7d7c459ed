pub(crate) mod line_buffer;
pub mod log_level;
pub mod log_macros;
pub mod log_sink;
pub mod logger;
pub mod noop_log_sink;
pub(crate) mod sink_slot;

#[cfg(feature = "log-bridge")]
pub mod log_bridge;

pub use noop_log_sink::NoopLogSink;
