use core::fmt;

/// Label used for raw level values outside the known set.
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

/// ANSI escape that restores the terminal's default attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI color used for raw level values outside the known set.
pub const ANSI_WHITE: &str = "\x1b[37m";

/// Defines the severity levels for log messages.
///
/// Levels are labels only: no ordering between them is defined, so there is
/// deliberately no `PartialOrd` and no level filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Informational messages about normal progress.
    Info = 0,
    /// Detail that is mostly useful while debugging.
    Debug = 1,
    /// Potentially harmful situations.
    Warning = 2,
    /// Errors the program can still recover from.
    Error = 3,
    /// Errors the program cannot recover from.
    Fatal = 4,
}

impl LogLevel {
    /// All levels, in discriminant order.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Converts a raw discriminant back into a level.
    ///
    /// Returns `None` for values outside the closed set, e.g. a level decoded
    /// from a wire byte written by a newer firmware.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(LogLevel::Info),
            1 => Some(LogLevel::Debug),
            2 => Some(LogLevel::Warning),
            3 => Some(LogLevel::Error),
            4 => Some(LogLevel::Fatal),
            _ => None,
        }
    }

    /// Display label placed between the brackets of every line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// ANSI color escape used by color-capable console writers.
    #[must_use]
    pub const fn ansi_color(self) -> &'static str {
        match self {
            LogLevel::Info => "\x1b[32m",
            LogLevel::Debug => "\x1b[36m",
            LogLevel::Warning => "\x1b[33m",
            LogLevel::Error => "\x1b[31m",
            LogLevel::Fatal => "\x1b[35m",
        }
    }

    /// Length in bytes of the `"[LABEL] "` prefix for this level.
    #[must_use]
    pub const fn prefix_len(self) -> usize {
        self.label().len() + 3
    }
}

/// Label for a raw level value, `"UNKNOWN"` when it is out of range.
#[must_use]
pub const fn label_for_raw(raw: u8) -> &'static str {
    match LogLevel::from_raw(raw) {
        Some(level) => level.label(),
        None => UNKNOWN_LABEL,
    }
}

/// Color for a raw level value, white when it is out of range.
#[must_use]
pub const fn color_for_raw(raw: u8) -> &'static str {
    match LogLevel::from_raw(raw) {
        Some(level) => level.ansi_color(),
        None => ANSI_WHITE,
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn labels_match_fixed_strings() {
        assert_eq!(LogLevel::Info.label(), "INFO");
        assert_eq!(LogLevel::Debug.label(), "DEBUG");
        assert_eq!(LogLevel::Warning.label(), "WARNING");
        assert_eq!(LogLevel::Error.label(), "ERROR");
        assert_eq!(LogLevel::Fatal.label(), "FATAL");
    }

    #[test]
    fn raw_values_round_trip_through_from_raw() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_raw(level as u8), Some(level));
            assert_eq!(label_for_raw(level as u8), level.label());
        }
    }

    #[test]
    fn out_of_range_raw_values_are_unknown() {
        for raw in [5u8, 6, 42, 200, u8::MAX] {
            assert_eq!(LogLevel::from_raw(raw), None);
            assert_eq!(label_for_raw(raw), "UNKNOWN");
            assert_eq!(color_for_raw(raw), ANSI_WHITE);
        }
    }

    #[test]
    fn colors_per_level() {
        assert_eq!(LogLevel::Info.ansi_color(), "\x1b[32m");
        assert_eq!(LogLevel::Debug.ansi_color(), "\x1b[36m");
        assert_eq!(LogLevel::Warning.ansi_color(), "\x1b[33m");
        assert_eq!(LogLevel::Error.ansi_color(), "\x1b[31m");
        assert_eq!(LogLevel::Fatal.ansi_color(), "\x1b[35m");
    }

    #[test]
    fn prefix_len_counts_brackets_and_space() {
        assert_eq!(LogLevel::Info.prefix_len(), "[INFO] ".len());
        assert_eq!(LogLevel::Warning.prefix_len(), "[WARNING] ".len());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(format!("{}", LogLevel::Fatal), "FATAL");
    }
}
