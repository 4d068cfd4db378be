//! Console sink implementation

use crate::core::{join_args, LogLevel, LogSink, LoggerError, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::fmt;
use std::io::{self, Write};

pub struct ConsoleSink {
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
    level_prefix: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
            level_prefix: false,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors: use_colors && cfg!(feature = "console"),
            level_prefix: false,
        }
    }

    /// Prefix each line with its level, e.g. `[WARN ] message`
    ///
    /// # Example
    ///
    /// ```
    /// use rust_dev_logger::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::with_colors(false).with_level_prefix(true);
    /// ```
    #[must_use]
    pub fn with_level_prefix(mut self, enabled: bool) -> Self {
        self.level_prefix = enabled;
        self
    }

    fn format_line(&self, level: LogLevel, args: &[&dyn fmt::Display]) -> String {
        let message = join_args(args);
        let line = if self.level_prefix {
            format!("[{:5}] {}", level.to_str(), message)
        } else {
            message
        };

        #[cfg(feature = "console")]
        if self.use_colors && level.is_diagnostic() {
            return line.color(level.color_code()).to_string();
        }

        line
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, level: LogLevel, args: &[&dyn fmt::Display]) -> Result<()> {
        let line = self.format_line(level, args);

        // Warn and Error go to stderr, Log to stdout
        if !level.is_diagnostic() {
            writeln!(io::stdout().lock(), "{}", line)?;
            return Ok(());
        }

        match writeln!(io::stderr().lock(), "{}", line) {
            Ok(()) => Ok(()),
            Err(e) => {
                // stderr unavailable, fall back to stdout
                writeln!(io::stdout().lock(), "{}", line).map_err(|fallback| {
                    eprintln!("[LOGGER ERROR] Console fallback failed: {}", fallback);
                    LoggerError::IoError(e)
                })
            }
        }
    }

    fn name(&self) -> &str {
        "console"
    }
}
