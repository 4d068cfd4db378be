//! Core dev logger types and traits

pub mod config;
pub mod dev;
pub mod error;
pub mod log_level;
pub mod sink;
pub mod stringify;
pub mod value;

pub use config::{DevConfig, DEFAULT_LOG_LEVEL, DEFAULT_WARN_TIMEOUT_MS};
pub use dev::{Dev, DevBuilder, FORWARDING_ENABLED};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use sink::{join_args, LogSink};
pub use stringify::{stringify, undefined_if_none, UNDEFINED_SENTINEL, UNDEFINED_TOKEN};
pub use value::{DevValue, Undefined};
