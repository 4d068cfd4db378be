//! Process-wide dev facade
//!
//! A lazily created [`Dev`] writing to the console backs the free functions
//! exported at the crate root. The sink and configuration can be replaced at
//! any time; calls already in flight keep the sink they started with.
//!
//! With the `production` feature the forwarding functions return `Ok(())`
//! without creating or locking the global `Dev`.

use crate::core::{Dev, DevConfig, LogSink, Result};
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, OnceLock};

static GLOBAL_DEV: OnceLock<RwLock<Dev>> = OnceLock::new();

fn global() -> &'static RwLock<Dev> {
    GLOBAL_DEV.get_or_init(|| RwLock::new(Dev::new()))
}

// Clone out so the lock is not held while the sink runs.
#[cfg(not(feature = "production"))]
fn current() -> Dev {
    global().read().clone()
}

/// Forward a warning to the global sink
#[cfg(not(feature = "production"))]
pub fn warn(args: &[&dyn fmt::Display]) -> Result<()> {
    current().warn(args)
}

#[cfg(feature = "production")]
#[inline(always)]
pub fn warn(_args: &[&dyn fmt::Display]) -> Result<()> {
    Ok(())
}

/// Forward a message to the global sink
#[cfg(not(feature = "production"))]
pub fn log(args: &[&dyn fmt::Display]) -> Result<()> {
    current().log(args)
}

#[cfg(feature = "production")]
#[inline(always)]
pub fn log(_args: &[&dyn fmt::Display]) -> Result<()> {
    Ok(())
}

/// Forward an error to the global sink
#[cfg(not(feature = "production"))]
pub fn error(args: &[&dyn fmt::Display]) -> Result<()> {
    current().error(args)
}

#[cfg(feature = "production")]
#[inline(always)]
pub fn error(_args: &[&dyn fmt::Display]) -> Result<()> {
    Ok(())
}

/// Replace the global sink
pub fn set_logger(logger: Arc<dyn LogSink>) {
    global().write().set_logger(logger);
}

pub fn config() -> DevConfig {
    *global().read().config()
}

pub fn set_config(config: DevConfig) {
    global().write().set_config(config);
}

/// Global sink, exposed for inspection in tests
#[doc(hidden)]
pub fn logger() -> Arc<dyn LogSink> {
    Arc::clone(global().read().logger())
}
