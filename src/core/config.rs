//! Configuration carried by the dev facade
//!
//! `warn_timeout` and `log_level` are kept as plain data. Nothing in this
//! crate reads them to change how `warn`, `log` or `error` behave; they are
//! exposed so that callers layering policy on top have a shared place to
//! keep them.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default warning timeout in milliseconds
pub const DEFAULT_WARN_TIMEOUT_MS: u64 = 5000;

/// Default log level
pub const DEFAULT_LOG_LEVEL: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DevConfig {
    /// Warning timeout in milliseconds
    pub warn_timeout: u64,
    pub log_level: u8,
}

impl DevConfig {
    pub fn new() -> Self {
        Self {
            warn_timeout: DEFAULT_WARN_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    /// Load a configuration from a JSON object
    ///
    /// Missing fields take their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_dev_logger::DevConfig;
    ///
    /// let config = DevConfig::from_json_str(r#"{ "logLevel": 2 }"#).unwrap();
    /// assert_eq!(config.log_level, 2);
    /// assert_eq!(config.warn_timeout, 5000);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoggerError::config("DevConfig", e.to_string()))
    }

    #[must_use]
    pub fn with_warn_timeout(mut self, timeout: Duration) -> Self {
        self.warn_timeout = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_log_level(mut self, level: u8) -> Self {
        self.log_level = level;
        self
    }

    pub fn warn_timeout(&self) -> Duration {
        Duration::from_millis(self.warn_timeout)
    }
}

impl Default for DevConfig {
    fn default() -> Self {
        Self::new()
    }
}
