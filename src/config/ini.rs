use std::{collections::HashMap, fs};

use crate::config::config_error::ConfigError;

/// Key/value settings grouped by `[Section]`, read from an INI-style file.
///
/// Keys before the first section header land in `globals`. Blank lines and
/// lines starting with `#` or `;` are skipped, values may be double-quoted.
#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] if the file cannot be read, [`ConfigError::Syntax`]
    /// for a line that is neither a header nor a `key = value` pair.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses INI-style text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Syntax`] for a line that is neither a header nor a
    /// `key = value` pair.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        let mut current_section: Option<String> = None;

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current_section = Some(name.trim().to_string());
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::Syntax {
                    line: idx + 1,
                    text: line.to_string(),
                });
            };
            let key = key.trim().to_string();
            let value = value.trim().trim_matches('"').to_string();

            match &current_section {
                None => {
                    config.globals.insert(key, value);
                }
                Some(sec) => {
                    config
                        .sections
                        .entry(sec.clone())
                        .or_default()
                        .insert(key, value);
                }
            }
        }
        Ok(config)
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(String::as_str)
    }

    /// Looks `key` up in `section`, then among the globals. Empty values count
    /// as missing, so an empty section value falls through to the global one.
    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key)
            .filter(|s| !s.is_empty())
            .or_else(|| {
                self.globals
                    .get(key)
                    .map(String::as_str)
                    .filter(|s| !s.is_empty())
            })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn parses_sections_globals_and_quotes() {
        let cfg = Config::parse(
            "# comment\ncolor = never\n\n[Logging]\ncolor = \"always\"\n; other\nempty =\n",
        )
        .unwrap();

        assert_eq!(cfg.globals.get("color").map(String::as_str), Some("never"));
        assert_eq!(cfg.get("Logging", "color"), Some("always"));
        assert_eq!(cfg.get("Logging", "empty"), Some(""));
        assert_eq!(cfg.get("Missing", "color"), None);
    }

    #[test]
    fn get_non_empty_falls_back_to_globals() {
        let cfg = Config::parse("color = never\n[Logging]\n").unwrap();
        assert_eq!(cfg.get_non_empty("Logging", "color"), Some("never"));
    }

    #[test]
    fn empty_section_value_does_not_hide_global() {
        let cfg = Config::parse("color = never\n[Logging]\ncolor =\n").unwrap();
        assert_eq!(cfg.get_non_empty("Logging", "color"), Some("never"));

        let cfg = Config::parse("color =\n[Logging]\ncolor = \"\"\n").unwrap();
        assert_eq!(cfg.get_non_empty("Logging", "color"), None);
    }

    #[test]
    fn section_value_wins_over_global() {
        let cfg = Config::parse("color = never\n[Logging]\ncolor = always\n").unwrap();
        assert_eq!(cfg.get_non_empty("Logging", "color"), Some("always"));
    }

    #[test]
    fn rejects_lines_without_equals() {
        let err = Config::parse("[Logging]\ncolor always\n").unwrap_err();
        match err {
            ConfigError::Syntax { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "color always");
            }
            other => panic!("expected Syntax, got: {other:?}"),
        }
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load("/definitely/not/here/portlog.ini").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here/portlog.ini"));
    }
}
