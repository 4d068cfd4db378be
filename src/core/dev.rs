//! Development-mode logging facade
//!
//! `Dev` forwards `warn`, `log` and `error` to an injected [`LogSink`].
//! With the `production` feature enabled the forwarding bodies compile to
//! `Ok(())` and never touch the sink.

use super::{config::DevConfig, error::Result, sink::LogSink, stringify};
use crate::sinks::ConsoleSink;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Whether forwarding calls reach the sink in this build
pub const FORWARDING_ENABLED: bool = !cfg!(feature = "production");

#[derive(Clone)]
pub struct Dev {
    config: DevConfig,
    logger: Arc<dyn LogSink>,
}

impl Dev {
    /// Create a facade that writes to the console
    #[must_use]
    pub fn new() -> Self {
        Self::with_logger(Arc::new(ConsoleSink::new()))
    }

    #[must_use]
    pub fn with_logger(logger: Arc<dyn LogSink>) -> Self {
        Self {
            config: DevConfig::default(),
            logger,
        }
    }

    pub fn builder() -> DevBuilder {
        DevBuilder::new()
    }

    pub fn config(&self) -> &DevConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DevConfig) {
        self.config = config;
    }

    pub fn set_logger(&mut self, logger: Arc<dyn LogSink>) {
        self.logger = logger;
    }

    /// Injected sink, exposed for inspection in tests
    #[doc(hidden)]
    pub fn logger(&self) -> &Arc<dyn LogSink> {
        &self.logger
    }

    /// See [`stringify`](crate::stringify)
    pub fn stringify<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        stringify::stringify(value)
    }

    /// Forward a warning to the sink
    ///
    /// # Example
    ///
    /// ```
    /// use rust_dev_logger::{Dev, DevValue, MemorySink};
    /// use std::sync::Arc;
    ///
    /// let sink = Arc::new(MemorySink::new());
    /// let dev = Dev::with_logger(sink.clone());
    ///
    /// let query = DevValue::object([("where", DevValue::Undefined)]);
    /// let text = dev.stringify(&query).unwrap();
    /// dev.warn(&[&"No records found:", &text]).unwrap();
    /// ```
    #[cfg(not(feature = "production"))]
    pub fn warn(&self, args: &[&dyn fmt::Display]) -> Result<()> {
        self.logger.warn(args)
    }

    #[cfg(feature = "production")]
    #[inline(always)]
    pub fn warn(&self, _args: &[&dyn fmt::Display]) -> Result<()> {
        Ok(())
    }

    /// Forward a plain message to the sink
    #[cfg(not(feature = "production"))]
    pub fn log(&self, args: &[&dyn fmt::Display]) -> Result<()> {
        self.logger.log(args)
    }

    #[cfg(feature = "production")]
    #[inline(always)]
    pub fn log(&self, _args: &[&dyn fmt::Display]) -> Result<()> {
        Ok(())
    }

    /// Forward an error to the sink
    #[cfg(not(feature = "production"))]
    pub fn error(&self, args: &[&dyn fmt::Display]) -> Result<()> {
        self.logger.error(args)
    }

    #[cfg(feature = "production")]
    #[inline(always)]
    pub fn error(&self, _args: &[&dyn fmt::Display]) -> Result<()> {
        Ok(())
    }
}

impl Default for Dev {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dev {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dev")
            .field("config", &self.config)
            .field("logger", &self.logger.name())
            .finish()
    }
}

/// Builder for constructing `Dev` with a fluent API
///
/// # Example
/// ```
/// use rust_dev_logger::prelude::*;
/// use std::time::Duration;
///
/// let dev = Dev::builder()
///     .warn_timeout(Duration::from_secs(2))
///     .log_level(1)
///     .sink(ConsoleSink::new().with_level_prefix(true))
///     .build();
///
/// assert_eq!(dev.config().warn_timeout, 2000);
/// ```
pub struct DevBuilder {
    config: DevConfig,
    logger: Option<Arc<dyn LogSink>>,
}

impl DevBuilder {
    pub fn new() -> Self {
        Self {
            config: DevConfig::default(),
            logger: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: DevConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn warn_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_warn_timeout(timeout);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_level(mut self, level: u8) -> Self {
        self.config = self.config.with_log_level(level);
        self
    }

    /// Use a shared sink
    #[must_use = "builder methods return a new value"]
    pub fn logger(mut self, logger: Arc<dyn LogSink>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Use an owned sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: LogSink + 'static>(self, sink: S) -> Self {
        self.logger(Arc::new(sink))
    }

    pub fn build(self) -> Dev {
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(ConsoleSink::new()));
        Dev {
            config: self.config,
            logger,
        }
    }
}

impl Default for DevBuilder {
    fn default() -> Self {
        Self::new()
    }
}
