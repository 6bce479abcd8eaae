//! Process-wide logger used by the level macros and free functions.
//!
//! Initialized on first use from [`LogConfig::from_env_or_default`]
//! (`MINLOG_LEVEL`, most verbose when unset) with a [`ConsoleSink`]. Both the
//! threshold and the sink stay replaceable afterwards.

use std::error::Error;
use std::sync::{Arc, OnceLock};

use minlog_core::{ConsoleSink, Level, LevelFlags, LogConfig, Logger, Sink};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(LogConfig::from_env_or_default().level, ConsoleSink::new()))
}

/// Configure the process-wide logger before anything else logs.
///
/// Returns `false` when the logger was already initialized, in which case
/// only the threshold from `config` is applied and the existing sink stays.
pub fn init(config: &LogConfig) -> bool {
    let mut fresh = false;
    let logger = LOGGER.get_or_init(|| {
        fresh = true;
        Logger::from_config(config)
    });
    if !fresh {
        logger.set_level(config.level);
    }
    fresh
}

/// Replace the threshold of the process-wide logger.
pub fn set_level(level: Level) {
    logger().set_level(level);
}

/// Current threshold of the global logger.
pub fn level() -> Level {
    logger().level()
}

/// Snapshot of the global per-tier flags.
pub fn flags() -> LevelFlags {
    logger().flags()
}

/// Install `sink` on the process-wide logger for all subsequent calls.
pub fn set_sink(sink: impl Sink + 'static) {
    logger().set_sink(sink);
}

/// Install an already shared sink on the global logger.
pub fn set_shared_sink(sink: Arc<dyn Sink>) {
    logger().set_shared_sink(sink);
}

#[inline]
pub fn enabled(level: Level) -> bool {
    logger().enabled(level)
}

#[inline]
pub fn error_enabled() -> bool {
    enabled(Level::Error)
}

#[inline]
pub fn warn_enabled() -> bool {
    enabled(Level::Warn)
}

#[inline]
pub fn info_enabled() -> bool {
    enabled(Level::Info)
}

#[inline]
pub fn debug_enabled() -> bool {
    enabled(Level::Debug)
}

#[inline]
pub fn trace_enabled() -> bool {
    enabled(Level::Trace)
}

/// Log through the process-wide logger with every part spelled out.
pub fn emit(
    level: Level,
    category: Option<&str>,
    message: &str,
    error: Option<&(dyn Error + 'static)>,
) {
    logger().emit(level, category, message, error);
}

/// Log `message` at `Error` on the global logger. The other tier functions
/// work the same way.
pub fn error(message: &str) {
    logger().error(message);
}

pub fn warn(message: &str) {
    logger().warn(message);
}

pub fn info(message: &str) {
    logger().info(message);
}

pub fn debug(message: &str) {
    logger().debug(message);
}

pub fn trace(message: &str) {
    logger().trace(message);
}
