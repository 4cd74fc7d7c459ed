use portlog::{
    ConfigError, ConsoleConfig, ConsoleLogger, ConsoleWriter, DEFAULT_CAPACITY, LogLevel, Logger,
    logger_fatal, logger_info,
};

/// Prints a few sample lines. An optional INI file path selects console colors.
fn main() -> Result<(), ConfigError> {
    let console = match std::env::args().nth(1) {
        Some(path) => ConsoleConfig::load(&path)?,
        None => ConsoleConfig::default(),
    };
    let log: ConsoleLogger<DEFAULT_CAPACITY> = Logger::new(ConsoleWriter::from_config(&console));

    log.log(LogLevel::Error, "Core Dumped ");
    logger_info!(log, "The value of this variable is {}", 10);
    logger_fatal!(log, "This variable cannot be const . So a != {}", 355);
    Ok(())
}
