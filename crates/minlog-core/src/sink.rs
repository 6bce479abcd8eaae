//! The render-and-write extension point.

use crate::record::Record;

/// Something that renders accepted records and writes them somewhere.
///
/// The gate has already filtered by level by the time `log` is called.
/// Implementations must not fail loudly: output errors are swallowed.
///
/// Closures taking `&Record` are sinks too.
pub trait Sink: Send + Sync {
    fn log(&self, record: &Record<'_>);
}

impl<F> Sink for F
where
    F: Fn(&Record<'_>) + Send + Sync,
{
    fn log(&self, record: &Record<'_>) {
        self(record)
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    #[inline]
    fn log(&self, _record: &Record<'_>) {}
}
