//! Tests for builds with the `production` feature
//!
//! Run with `--features production`.

#![cfg(feature = "production")]

use rust_dev_logger::prelude::*;
use rust_dev_logger::{dev_error, dev_log, dev_warn};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct CountingSink {
    calls: AtomicUsize,
}

impl LogSink for CountingSink {
    fn write(&self, _level: LogLevel, _args: &[&dyn fmt::Display]) -> rust_dev_logger::Result<()> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Err(LoggerError::writer("sink must not be called in production"))
    }

    fn name(&self) -> &str {
        "counting"
    }
}

#[test]
fn test_forwarding_is_stripped() {
    assert!(!FORWARDING_ENABLED);

    let sink = Arc::new(CountingSink {
        calls: AtomicUsize::new(0),
    });
    let dev = Dev::with_logger(sink.clone());

    dev.warn(&[&"x"]).unwrap();
    dev.log(&[&"x"]).unwrap();
    dev.error(&[&"x"]).unwrap();
    dev_warn!(dev => "x").unwrap();
    dev_log!(dev => "x").unwrap();
    dev_error!(dev => "x").unwrap();

    assert_eq!(sink.calls.load(Ordering::Relaxed), 0);
}

#[test]
fn test_stringify_still_available() {
    let value = DevValue::object([("where", DevValue::Undefined)]);
    assert_eq!(stringify(&value).unwrap(), "{\n  \"where\": undefined\n}");
}

#[test]
fn test_global_forwarding_is_stripped() {
    let sink = Arc::new(CountingSink {
        calls: AtomicUsize::new(0),
    });
    rust_dev_logger::set_logger(sink.clone());

    rust_dev_logger::warn(&[&"x"]).unwrap();
    rust_dev_logger::log(&[&"x"]).unwrap();
    rust_dev_logger::error(&[&"x"]).unwrap();
    dev_warn!("x").unwrap();

    assert_eq!(sink.calls.load(Ordering::Relaxed), 0);
}
