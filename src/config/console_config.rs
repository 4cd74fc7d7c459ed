use crate::config::{config_error::ConfigError, ini::Config};

/// Section read by [`ConsoleConfig::from_config`].
pub const LOGGING_SECTION: &str = "Logging";

/// Environment variable that disables colors in [`ColorMode::Auto`].
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Whether the console writer wraps lines in ANSI colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parses `auto`, `always` or `never` (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Decides whether to color given the state of the output stream.
    #[must_use]
    pub const fn resolve(self, is_terminal: bool, no_color_set: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal && !no_color_set,
        }
    }
}

/// Runtime settings of the hosted console writer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub color: ColorMode,
}

impl ConsoleConfig {
    /// Loads the `[Logging]` section of an INI-style file.
    ///
    /// # Errors
    ///
    /// Propagates read and syntax errors from [`Config::load`] and reports an
    /// unrecognized `color` value as [`ConfigError::InvalidValue`].
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let config = Config::load(path)?;
        Self::from_config(&config)
    }

    /// Extracts console settings from an already parsed [`Config`].
    /// Missing keys keep their defaults; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for an unrecognized `color` value.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut out = ConsoleConfig::default();

        if let Some(value) = config.get_non_empty(LOGGING_SECTION, "color") {
            out.color = ColorMode::parse(value).ok_or_else(|| ConfigError::InvalidValue {
                key: "color",
                value: value.to_string(),
            })?;
        }
        Ok(out)
    }
}
