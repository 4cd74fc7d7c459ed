#![cfg(all(feature = "std", feature = "log-warning"))]
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Bare-metal style setup: a `static` logger whose default writer is a serial
//! port backed by a plain function.

use std::sync::Mutex;

use portlog::{LogLevel, Logger, NoopLogSink, SerialLogger, SerialWriter, logger_warning};

static WIRE: Mutex<Vec<u8>> = Mutex::new(Vec::new());

fn uart_write(bytes: &[u8]) {
    WIRE.lock().unwrap().extend_from_slice(bytes);
}

static LOG: SerialLogger<64, fn(&[u8])> = Logger::new(SerialWriter::new(uart_write as fn(&[u8])));

#[test]
fn static_serial_logger_writes_crlf_lines() {
    LOG.log(LogLevel::Info, "boot");
    logger_warning!(LOG, "vbat={}mV", 3300);
    LOG.log(LogLevel::Info, "x".repeat(100).as_str());

    {
        let wire = WIRE.lock().unwrap();
        assert_eq!(
            std::str::from_utf8(&wire).unwrap(),
            "[INFO] boot\r\n[WARNING] vbat=3300mV\r\n"
        );
    }

    LOG.set_sink(Some(portlog::sink(NoopLogSink)));
    LOG.log(LogLevel::Error, "swallowed");
    LOG.clear_sink();
    LOG.log(LogLevel::Debug, "after");
    assert!(
        WIRE.lock()
            .unwrap()
            .ends_with(b"[WARNING] vbat=3300mV\r\n[DEBUG] after\r\n")
    );
}
