//! minlog core library
//!
//! A small leveled logging facade: a level gate that decides, with one flag
//! check, whether a message is wanted, and a replaceable [`Sink`] that renders
//! and writes the records that pass.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use minlog_core::{BufferSink, Level, Logger, Record};
//!
//! let buffer = Arc::new(BufferSink::default());
//! let logger = Logger::with_shared_sink(Level::Info, buffer.clone());
//!
//! logger.debug("dropped: below the threshold");
//! logger.log(&Record::new(Level::Warn, "disk almost full").with_category("storage"));
//!
//! if logger.trace_enabled() {
//!     // expensive message construction is skipped entirely
//! }
//!
//! assert_eq!(buffer.lines(), vec!["[storage] disk almost full"]);
//! ```
//!
//! ## Sinks
//!
//! - [`ConsoleSink`]: the default, `MM:SS LEVEL: [category] message` on stdout
//! - [`DatedSink`]: wall-clock timestamp and numeric level
//! - [`BufferSink`]: bounded in-memory capture
//! - any `Fn(&Record)` closure

pub mod buffer;
pub mod config;
pub mod console;
pub mod dated;
pub mod error;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;

// Re-exports
pub use buffer::{BufferSink, CapturedRecord};
pub use config::{LogConfig, LEVEL_ENV_VAR};
pub use console::{format_elapsed, ConsoleSink};
pub use dated::DatedSink;
pub use error::{ConfigError, ParseLevelError};
pub use level::{Level, LevelFlags};
pub use logger::Logger;
pub use record::{render_error, Record};
pub use sink::{NullSink, Sink};
