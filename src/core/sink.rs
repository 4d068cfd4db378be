//! Sink trait for forwarded log calls

use super::{error::Result, log_level::LogLevel};
use std::fmt;

/// Destination that `warn`, `log` and `error` forward their arguments to
///
/// Implementors only need `write`; the per-level methods route to it.
pub trait LogSink: Send + Sync {
    fn write(&self, level: LogLevel, args: &[&dyn fmt::Display]) -> Result<()>;
    fn name(&self) -> &str;

    fn warn(&self, args: &[&dyn fmt::Display]) -> Result<()> {
        self.write(LogLevel::Warn, args)
    }

    fn log(&self, args: &[&dyn fmt::Display]) -> Result<()> {
        self.write(LogLevel::Log, args)
    }

    fn error(&self, args: &[&dyn fmt::Display]) -> Result<()> {
        self.write(LogLevel::Error, args)
    }
}

/// Join arguments with single spaces, the way a console prints them
pub fn join_args(args: &[&dyn fmt::Display]) -> String {
    args.iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
