//! # Rust Dev Logger
//!
//! Development-mode logging helpers that disappear from production builds.
//!
//! ## Features
//!
//! - **Forwarding**: `warn`, `log` and `error` pass their arguments, in order
//!   and unchanged, to a pluggable sink
//! - **Production stripping**: the `production` feature compiles forwarding
//!   to a no-op that never touches the sink
//! - **Undefined-preserving stringify**: indented JSON that shows properties
//!   with no value as `undefined` instead of dropping them
//!
//! ```
//! use rust_dev_logger::{stringify, DevValue};
//!
//! let query = DevValue::object([("where", DevValue::Undefined)]);
//! let text = stringify(&query).unwrap();
//! assert_eq!(text, "{\n  \"where\": undefined\n}");
//!
//! rust_dev_logger::warn(&[&"No records found:", &text]).unwrap();
//! ```

pub mod core;
mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Dev, DevBuilder, DevConfig, DevValue, LogLevel, LogSink, LoggerError, Result, Undefined,
        FORWARDING_ENABLED,
    };
    pub use crate::core::{stringify, undefined_if_none, UNDEFINED_SENTINEL, UNDEFINED_TOKEN};
    pub use crate::sinks::{ConsoleSink, MemorySink, SinkRecord};
}

pub use crate::core::{
    stringify, undefined_if_none, Dev, DevBuilder, DevConfig, DevValue, LogLevel, LogSink,
    LoggerError, Result, Undefined, FORWARDING_ENABLED, UNDEFINED_SENTINEL, UNDEFINED_TOKEN,
};
pub use global::{config, error, log, set_config, set_logger, warn};
#[doc(hidden)]
pub use global::logger;
pub use sinks::{ConsoleSink, MemorySink, SinkRecord};
