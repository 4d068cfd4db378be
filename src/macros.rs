//! Forwarding macros for variadic arguments.
//!
//! Each macro takes any number of `Display` arguments and forwards them, in
//! order, to the global facade or to a given `Dev` (`dev => args...`). The
//! macros expand to calls into this crate, so the `production` feature of
//! this crate decides whether anything reaches the sink.
//!
//! # Examples
//!
//! ```
//! use rust_dev_logger::{dev_log, dev_warn, stringify, DevValue};
//!
//! # fn main() -> rust_dev_logger::Result<()> {
//! let query = DevValue::object([("where", DevValue::Undefined)]);
//!
//! dev_warn!("No records found:", stringify(&query)?)?;
//! dev_log!("hi")?;
//! # Ok(())
//! # }
//! ```

/// Forward a warning.
///
/// # Examples
///
/// ```
/// use rust_dev_logger::{dev_warn, Dev, MemorySink};
/// use std::sync::Arc;
///
/// let dev = Dev::with_logger(Arc::new(MemorySink::new()));
/// dev_warn!(dev => "Retry", 3, "of", 5).unwrap();
/// ```
#[macro_export]
macro_rules! dev_warn {
    () => {
        $crate::warn(&[])
    };
    ($dev:expr => $($arg:expr),* $(,)?) => {
        $dev.warn(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::warn(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Forward a plain message.
///
/// # Examples
///
/// ```
/// use rust_dev_logger::dev_log;
/// dev_log!("Processing", 100, "items").unwrap();
/// ```
#[macro_export]
macro_rules! dev_log {
    () => {
        $crate::log(&[])
    };
    ($dev:expr => $($arg:expr),* $(,)?) => {
        $dev.log(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::log(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Forward an error.
///
/// # Examples
///
/// ```
/// use rust_dev_logger::dev_error;
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "Oh no!");
/// dev_error!(err).unwrap();
/// ```
#[macro_export]
macro_rules! dev_error {
    () => {
        $crate::error(&[])
    };
    ($dev:expr => $($arg:expr),* $(,)?) => {
        $dev.error(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::error(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}
