pub mod config_error;
pub mod console_config;
pub mod ini;

pub use config_error::ConfigError;
pub use console_config::{ColorMode, ConsoleConfig};
pub use ini::Config;
