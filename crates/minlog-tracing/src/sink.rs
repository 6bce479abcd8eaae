//! A minlog sink that re-emits records as tracing events.

use minlog_core::{render_error, Level, Record, Sink};

/// Target of every event emitted by [`TracingSink`].
pub const TARGET: &str = "minlog";

/// Forwards records to whatever tracing subscriber is current.
///
/// The category and rendered error travel as the `category` and `error`
/// fields, so a [`SinkLayer`](crate::SinkLayer) downstream rebuilds the same
/// record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// A sink forwarding to the current tracing dispatcher.
    pub fn new() -> Self {
        Self
    }
}

macro_rules! forward {
    ($macro:ident, $record:expr, $error:expr) => {
        tracing::$macro!(
            target: TARGET,
            category = $record.category(),
            error = $error,
            "{}",
            $record.message()
        )
    };
}

impl Sink for TracingSink {
    fn log(&self, record: &Record<'_>) {
        let error = record.error().map(render_error);
        let error = error.as_deref();

        match record.level() {
            Level::Error => forward!(error, record, error),
            Level::Warn => forward!(warn, record, error),
            Level::Info => forward!(info, record, error),
            Level::Debug => forward!(debug, record, error),
            Level::Trace => forward!(trace, record, error),
            Level::None => {}
        }
    }
}
