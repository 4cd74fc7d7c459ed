use std::{fmt, io};

#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, source: io::Error },
    Syntax { line: usize, text: String },
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => write!(f, "Error reading file {path}: {source}"),
            ConfigError::Syntax { line, text } => {
                write!(f, "Malformed line {line}: {text}")
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {key}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
