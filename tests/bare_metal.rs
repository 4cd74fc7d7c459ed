#![cfg(not(feature = "std"))]
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Built with `--no-default-features`: the logger runs without its lock and
//! sinks are plain `&'static` references, as on a microcontroller.

use std::sync::Mutex;

use portlog::{LogLevel, LogSink, Logger, SerialLogger, SerialWriter, logger_log};

static WIRE: Mutex<Vec<u8>> = Mutex::new(Vec::new());

fn uart_write(bytes: &[u8]) {
    WIRE.lock().unwrap().extend_from_slice(bytes);
}

struct RamSink {
    lines: Mutex<Vec<String>>,
}

impl LogSink for RamSink {
    fn log(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

static RAM: RamSink = RamSink {
    lines: Mutex::new(Vec::new()),
};

static LOG: SerialLogger<64, fn(&[u8])> = Logger::new(SerialWriter::new(uart_write as fn(&[u8])));

#[test]
fn static_sink_and_serial_fallback_without_std() {
    LOG.log(LogLevel::Info, "boot");
    assert!(!LOG.has_sink());

    let ram: &'static dyn LogSink = &RAM;
    LOG.set_sink(Some(ram));
    LOG.log(LogLevel::Warning, "to ram");
    logger_log!(LOG, LogLevel::Debug, "vbat={}mV", 3300);

    // An absent candidate keeps the static sink.
    LOG.set_sink(None);
    assert!(LOG.has_sink());
    LOG.log(LogLevel::Error, "still ram");

    LOG.clear_sink();
    assert!(!LOG.has_sink());
    LOG.log(LogLevel::Fatal, "back on the wire");
    LOG.log(LogLevel::Info, None);
    LOG.log(LogLevel::Info, "y".repeat(100).as_str());

    assert_eq!(
        *RAM.lines.lock().unwrap(),
        ["[WARNING] to ram", "[DEBUG] vbat=3300mV", "[ERROR] still ram"]
    );
    assert_eq!(
        std::str::from_utf8(&WIRE.lock().unwrap()).unwrap(),
        "[INFO] boot\r\n[FATAL] back on the wire\r\n"
    );
}
