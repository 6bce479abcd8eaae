//! tracing interop for minlog
//!
//! Two directions:
//!
//! - [`SinkLayer`]: a `tracing_subscriber` Layer that sends tracing events
//!   through a minlog [`Logger`](minlog_core::Logger) gate and sink
//! - [`TracingSink`]: a minlog [`Sink`](minlog_core::Sink) that re-emits
//!   records as tracing events
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use minlog_core::{ConsoleSink, Level, Logger};
//! use minlog_tracing::SinkLayer;
//! use tracing_subscriber::prelude::*;
//!
//! let logger = Arc::new(Logger::new(Level::Info, ConsoleSink::new()));
//! tracing_subscriber::registry()
//!     .with(SinkLayer::new(logger))
//!     .init();
//!
//! tracing::info!(target: "net", "connected");
//! // 00:00  INFO: [net] connected
//! ```

pub mod layer;
pub mod sink;

// Re-exports
pub use layer::{level_from_tracing, SinkLayer};
pub use sink::{TracingSink, TARGET};
