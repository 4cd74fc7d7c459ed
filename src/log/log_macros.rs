//! Leveled logging macros over `Logger::log_fmt`.
//!
//! # Feature Flags
//! Each level is controlled by its own cargo feature:
//! `log-info`, `log-debug`, `log-warning`, `log-error`, `log-fatal`.
//! Levels are unordered, so enabling one never implies another.
//!
//! If a feature is disabled, the corresponding macros expand to `()`, removing
//! all formatting overhead at compile time.

// ============================================================================
// 1. GENERIC MACROS
// ============================================================================

/// Formats and emits a line at `$lvl` on an explicit logger.
#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)+) => {{
        $logger.log_fmt($lvl, ::core::format_args!($($arg)+));
    }};
}

/// Formats and emits a line at `$lvl` on the global logger.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! log_msg {
    ($lvl:expr, $($arg:tt)+) => {
        $crate::logger_log!($crate::global(), $lvl, $($arg)+)
    };
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Info, $($arg)+) } }
#[cfg(all(feature = "log-info", feature = "std"))]
#[macro_export]
macro_rules! log_info { ($($arg:tt)+) => { $crate::log_msg!($crate::log::log_level::LogLevel::Info, $($arg)+) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(all(not(feature = "log-info"), feature = "std"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Debug, $($arg)+) } }
#[cfg(all(feature = "log-debug", feature = "std"))]
#[macro_export]
macro_rules! log_debug { ($($arg:tt)+) => { $crate::log_msg!($crate::log::log_level::LogLevel::Debug, $($arg)+) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(all(not(feature = "log-debug"), feature = "std"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARNING ----------------------
#[cfg(feature = "log-warning")]
#[macro_export]
macro_rules! logger_warning { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Warning, $($arg)+) } }
#[cfg(all(feature = "log-warning", feature = "std"))]
#[macro_export]
macro_rules! log_warning { ($($arg:tt)+) => { $crate::log_msg!($crate::log::log_level::LogLevel::Warning, $($arg)+) } }

#[cfg(not(feature = "log-warning"))]
#[macro_export]
macro_rules! logger_warning {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(all(not(feature = "log-warning"), feature = "std"))]
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Error, $($arg)+) } }
#[cfg(all(feature = "log-error", feature = "std"))]
#[macro_export]
macro_rules! log_error { ($($arg:tt)+) => { $crate::log_msg!($crate::log::log_level::LogLevel::Error, $($arg)+) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(all(not(feature = "log-error"), feature = "std"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- FATAL ----------------------
#[cfg(feature = "log-fatal")]
#[macro_export]
macro_rules! logger_fatal { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Fatal, $($arg)+) } }
#[cfg(all(feature = "log-fatal", feature = "std"))]
#[macro_export]
macro_rules! log_fatal { ($($arg:tt)+) => { $crate::log_msg!($crate::log::log_level::LogLevel::Fatal, $($arg)+) } }

#[cfg(not(feature = "log-fatal"))]
#[macro_export]
macro_rules! logger_fatal {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(all(not(feature = "log-fatal"), feature = "std"))]
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {
        ()
    };
}
