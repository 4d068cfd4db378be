//! In-memory sink that records every forwarded call

use crate::core::{LogLevel, LogSink, Result};
use parking_lot::Mutex;
use std::fmt;

/// One forwarded call: the sink channel and its rendered arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRecord {
    pub level: LogLevel,
    pub args: Vec<String>,
}

/// Sink that keeps forwarded calls in order
///
/// Arguments are rendered with `Display` as they arrive, one string per
/// argument.
///
/// # Example
///
/// ```
/// use rust_dev_logger::sinks::{LogSink, MemorySink};
/// use rust_dev_logger::LogLevel;
///
/// let sink = MemorySink::new();
/// sink.warn(&[&"disk", &90]).unwrap();
///
/// let records = sink.take();
/// assert_eq!(records[0].level, LogLevel::Warn);
/// assert_eq!(records[0].args, vec!["disk", "90"]);
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<SinkRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of all recorded calls
    pub fn entries(&self) -> Vec<SinkRecord> {
        self.records.lock().clone()
    }

    /// Remove and return all recorded calls
    pub fn take(&self) -> Vec<SinkRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    /// Argument lists recorded for one level
    pub fn calls(&self, level: LogLevel) -> Vec<Vec<String>> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.args.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl LogSink for MemorySink {
    fn write(&self, level: LogLevel, args: &[&dyn fmt::Display]) -> Result<()> {
        let args = args.iter().map(|arg| arg.to_string()).collect();
        self.records.lock().push(SinkRecord { level, args });
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
