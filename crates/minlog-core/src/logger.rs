//! The level gate and the installed sink, bundled as one context object.
//!
//! ## Architecture
//!
//! ```text
//! call site ──▶ Logger::enabled(level)      one atomic load + bit test
//!                   │ false → return
//!                   ▼ true
//!               Record { level, category, message, error }
//!                   │
//!                   ▼
//!               sink: RwLock<Arc<dyn Sink>> ──▶ Sink::log(&record)
//! ```
//!
//! The read lock is only held long enough to clone the `Arc`, so a sink
//! swapped in with [`Logger::set_sink`] never affects a call already in
//! flight, and a slow sink never blocks a swap.

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::LogConfig;
use crate::console::ConsoleSink;
use crate::level::{Level, LevelFlags};
use crate::record::Record;
use crate::sink::Sink;

/// Level gate plus replaceable sink.
pub struct Logger {
    /// [`LevelFlags::bits`] for the current threshold. The threshold itself
    /// is the lowest set bit, so one store updates both.
    flags: AtomicU8,
    sink: RwLock<Arc<dyn Sink>>,
}

impl Logger {
    /// A logger at `threshold` writing to `sink`.
    pub fn new(threshold: Level, sink: impl Sink + 'static) -> Self {
        Self::with_shared_sink(threshold, Arc::new(sink))
    }

    /// A logger at `threshold` writing to a sink that is shared with the
    /// caller, e.g. a [`BufferSink`](crate::BufferSink) inspected later.
    pub fn with_shared_sink(threshold: Level, sink: Arc<dyn Sink>) -> Self {
        Self {
            flags: AtomicU8::new(LevelFlags::for_threshold(threshold).bits()),
            sink: RwLock::new(sink),
        }
    }

    /// A logger configured from `config`, writing through a fresh
    /// [`ConsoleSink`].
    pub fn from_config(config: &LogConfig) -> Self {
        Self::new(config.level, ConsoleSink::new())
    }

    /// Current threshold.
    pub fn level(&self) -> Level {
        threshold_of(self.flags.load(Ordering::Relaxed))
    }

    /// Replace the threshold and recompute the tier flags.
    pub fn set_level(&self, threshold: Level) {
        self.flags
            .store(LevelFlags::for_threshold(threshold).bits(), Ordering::Relaxed);
    }

    /// Snapshot of the per-tier flags.
    pub fn flags(&self) -> LevelFlags {
        LevelFlags::from_bits(self.flags.load(Ordering::Relaxed))
    }

    /// Whether a message at `level` would be forwarded to the sink.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        self.flags.load(Ordering::Relaxed) & level.bit() != 0
    }

    /// Shorthand for `enabled(Level::Error)`; likewise for the other tiers.
    #[inline]
    pub fn error_enabled(&self) -> bool {
        self.enabled(Level::Error)
    }

    #[inline]
    pub fn warn_enabled(&self) -> bool {
        self.enabled(Level::Warn)
    }

    #[inline]
    pub fn info_enabled(&self) -> bool {
        self.enabled(Level::Info)
    }

    #[inline]
    pub fn debug_enabled(&self) -> bool {
        self.enabled(Level::Debug)
    }

    #[inline]
    pub fn trace_enabled(&self) -> bool {
        self.enabled(Level::Trace)
    }

    /// Install `sink` for all subsequent calls.
    pub fn set_sink(&self, sink: impl Sink + 'static) {
        self.set_shared_sink(Arc::new(sink));
    }

    /// Install an already shared sink for all subsequent calls.
    pub fn set_shared_sink(&self, sink: Arc<dyn Sink>) {
        *self.sink.write() = sink;
    }

    /// The currently installed sink.
    pub fn sink(&self) -> Arc<dyn Sink> {
        self.sink.read().clone()
    }

    /// Gate `record` on its level and hand it to the sink.
    #[inline]
    pub fn log(&self, record: &Record<'_>) {
        if self.enabled(record.level()) {
            self.dispatch(record);
        }
    }

    /// Hand `record` to the sink without checking the gate.
    ///
    /// For callers that already checked [`Logger::enabled`], such as the
    /// level macros.
    pub fn dispatch(&self, record: &Record<'_>) {
        let sink = self.sink();
        sink.log(record);
    }

    /// Log at `level` with every optional part spelled out.
    pub fn emit(
        &self,
        level: Level,
        category: Option<&str>,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        if self.enabled(level) {
            self.dispatch(
                &Record::new(level, message)
                    .with_category_opt(category)
                    .with_error_opt(error),
            );
        }
    }

    /// Log `message` at `Error` with no category or error attached.
    pub fn error(&self, message: &str) {
        self.emit(Level::Error, None, message, None);
    }

    pub fn warn(&self, message: &str) {
        self.emit(Level::Warn, None, message, None);
    }

    pub fn info(&self, message: &str) {
        self.emit(Level::Info, None, message, None);
    }

    pub fn debug(&self, message: &str) {
        self.emit(Level::Debug, None, message, None);
    }

    pub fn trace(&self, message: &str) {
        self.emit(Level::Trace, None, message, None);
    }
}

/// Threshold encoded by packed flags: the lowest enabled tier, or `None`
/// when nothing is enabled.
fn threshold_of(bits: u8) -> Level {
    if bits == 0 {
        return Level::None;
    }
    Level::from_rank(bits.trailing_zeros() as u8).unwrap_or(Level::None)
}

impl Default for Logger {
    /// Most verbose threshold, console output.
    fn default() -> Self {
        Self::from_config(&LogConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("flags", &self.flags())
            .finish_non_exhaustive()
    }
}
