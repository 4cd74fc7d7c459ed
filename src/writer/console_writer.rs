use std::{
    env,
    io::{self, IsTerminal, Write},
    sync::OnceLock,
};

use crate::{
    config::console_config::{ColorMode, ConsoleConfig, NO_COLOR_ENV},
    log::log_level::{ANSI_RESET, LogLevel},
    writer::line_writer::LineWriter,
};

/// Default writer for hosted targets: one line per call on stdout.
///
/// Colors are decided once, on the first line written.
#[derive(Debug)]
pub struct ConsoleWriter {
    mode: ColorMode,
    colored: OnceLock<bool>,
}

impl ConsoleWriter {
    pub const fn new() -> Self {
        Self::with_color(ColorMode::Auto)
    }

    pub const fn with_color(mode: ColorMode) -> Self {
        Self {
            mode,
            colored: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::with_color(config.color)
    }

    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.mode
    }

    fn is_colored(&self) -> bool {
        *self.colored.get_or_init(|| {
            self.mode.resolve(
                io::stdout().is_terminal(),
                env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()),
            )
        })
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineWriter for ConsoleWriter {
    fn write_line(&self, level: LogLevel, line: &str) {
        let colored = self.is_colored();
        let mut out = io::stdout().lock();
        // Console failures are not reported: logging must not take the caller down.
        let _ = write_console_line(&mut out, level, line, colored);
    }
}

/// Writes one newline-terminated line, wrapped in the level color if asked.
pub(crate) fn write_console_line<W: Write>(
    out: &mut W,
    level: LogLevel,
    line: &str,
    colored: bool,
) -> io::Result<()> {
    if colored {
        writeln!(out, "{}{line}{ANSI_RESET}", level.ansi_color())
    } else {
        writeln!(out, "{line}")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    fn render(level: LogLevel, line: &str, colored: bool) -> String {
        let mut out = Vec::new();
        write_console_line(&mut out, level, line, colored).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_line_is_newline_terminated() {
        assert_eq!(render(LogLevel::Info, "[INFO] up", false), "[INFO] up\n");
    }

    #[test]
    fn colored_line_is_wrapped_in_level_color_and_reset() {
        assert_eq!(
            render(LogLevel::Error, "[ERROR] down", true),
            "\x1b[31m[ERROR] down\x1b[0m\n"
        );
        assert_eq!(
            render(LogLevel::Fatal, "[FATAL] gone", true),
            "\x1b[35m[FATAL] gone\x1b[0m\n"
        );
    }

    #[test]
    fn forced_modes_ignore_the_terminal() {
        assert!(ConsoleWriter::with_color(ColorMode::Always).is_colored());
        assert!(!ConsoleWriter::with_color(ColorMode::Never).is_colored());
    }

    #[test]
    fn built_from_config() {
        let cfg = ConsoleConfig {
            color: ColorMode::Never,
        };
        assert_eq!(ConsoleWriter::from_config(&cfg).color_mode(), ColorMode::Never);
    }
}
