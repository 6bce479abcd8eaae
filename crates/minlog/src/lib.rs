//! minlog
//!
//! A low-overhead leveled logging facade. Calls at a disabled level cost one
//! flag check; calls that pass are rendered by the installed sink.
//!
//! ## Usage
//!
//! ```no_run
//! use minlog::{Level, LogConfig};
//!
//! // Optional: otherwise MINLOG_LEVEL decides, defaulting to the most verbose.
//! minlog::init(&LogConfig::new(Level::Info));
//!
//! minlog::info!("server listening on {}", 8080);
//! minlog::warn!(category: "net", "peer {} is slow", "joy");
//!
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
//! minlog::error!(category: "net", error: &err, "dropping peer");
//!
//! if minlog::debug_enabled() {
//!     // build an expensive dump only when someone will see it
//! }
//! ```
//!
//! Output on stdout:
//!
//! ```text
//! 00:00  INFO: server listening on 8080
//! 00:00  WARN: [net] peer joy is slow
//! 00:00 ERROR: [net] dropping peer
//! connection reset
//! ```
//!
//! ## Explicit loggers
//!
//! Components that should not touch process-wide state hold their own
//! [`Logger`] and pass it to the macros with `logger:`.
//!
//! ```
//! use std::sync::Arc;
//! use minlog::{BufferSink, Level, Logger};
//!
//! let buffer = Arc::new(BufferSink::default());
//! let logger = Logger::with_shared_sink(Level::Debug, buffer.clone());
//!
//! minlog::debug!(logger: &logger, category: "cache", "miss for {}", "key-1");
//! minlog::trace!(logger: &logger, "not recorded");
//!
//! assert_eq!(buffer.lines(), vec!["[cache] miss for key-1"]);
//! ```

pub mod global;
mod macros;

// Re-exports
pub use global::{
    debug, debug_enabled, emit, enabled, error, error_enabled, flags, info, info_enabled, init,
    level, logger, set_level, set_shared_sink, set_sink, trace, trace_enabled, warn, warn_enabled,
};
pub use minlog_core::{
    format_elapsed, render_error, BufferSink, CapturedRecord, ConfigError, ConsoleSink, DatedSink,
    Level, LevelFlags, LogConfig, Logger, NullSink, ParseLevelError, Record, Sink, LEVEL_ENV_VAR,
};
