//! A tracing Layer that feeds events into a minlog sink.
//!
//! Events keep their level; the category comes from a `category` field when
//! present, otherwise from the event target. An `error` field becomes the
//! record's error trace and every other field is appended to the message as
//! `key=value`.

use std::error::Error;
use std::fmt::{self, Write as FmtWrite};
use std::sync::Arc;

use minlog_core::{render_error, Level, Logger, Record, Sink};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Map a tracing level onto the minlog scale.
pub fn level_from_tracing(level: tracing::Level) -> Level {
    match level {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::WARN => Level::Warn,
        tracing::Level::INFO => Level::Info,
        tracing::Level::DEBUG => Level::Debug,
        _ => Level::Trace,
    }
}

/// A tracing Layer that gates events with a [`Logger`] and hands the
/// survivors to its sink.
///
/// ```ignore
/// use tracing_subscriber::prelude::*;
///
/// let layer = SinkLayer::new(Arc::new(Logger::default()));
/// tracing_subscriber::registry().with(layer).init();
/// tracing::info!(category = "net", peer = "joy", "connected");
/// // 00:00  INFO: [net] connected peer=joy
/// ```
pub struct SinkLayer {
    logger: Arc<Logger>,
    with_spans: bool,
}

impl SinkLayer {
    /// A layer gating on and writing through `logger`.
    pub fn new(logger: Arc<Logger>) -> Self {
        Self {
            logger,
            with_spans: false,
        }
    }

    /// A layer with its own logger at `threshold` writing to `sink`.
    pub fn with_sink(threshold: Level, sink: impl Sink + 'static) -> Self {
        Self::new(Arc::new(Logger::new(threshold, sink)))
    }

    /// Prefix messages with the active span path (`outer > inner: `).
    pub fn with_span_path(mut self) -> Self {
        self.with_spans = true;
        self
    }

    /// The logger events are routed through. Changing its level or sink
    /// takes effect for the next event.
    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

impl<S> Layer<S> for SinkLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = level_from_tracing(*metadata.level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        let mut message = String::new();
        if self.with_spans {
            if let Some(scope) = ctx.event_scope(event) {
                let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
                if !spans.is_empty() {
                    message.push_str(&spans.join(" > "));
                    message.push_str(": ");
                }
            }
        }
        message.push_str(visitor.message.as_deref().unwrap_or_default());
        message.push_str(&visitor.fields);

        let category = visitor.category.as_deref().unwrap_or(metadata.target());
        let error = visitor.error.map(CapturedError);

        let mut record = Record::new(level, &message).with_category(category);
        if let Some(error) = &error {
            record = record.with_error(error);
        }

        self.logger.dispatch(&record);
    }
}

/// Rendered error text standing in for an error that only lived for the
/// duration of a `record_error` call.
#[derive(Debug)]
struct CapturedError(String);

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for CapturedError {}

/// Visitor that splits an event into message, category, error and the
/// remaining `key=value` fields.
#[derive(Default)]
struct RecordVisitor {
    message: Option<String>,
    category: Option<String>,
    error: Option<String>,
    fields: String,
}

impl RecordVisitor {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        let _ = write!(self.fields, " {name}={value}");
    }

    fn record_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = Some(value),
            "category" => self.category = Some(value),
            "error" => self.error = Some(value),
            name => self.push_field(name, format_args!("{value}")),
        }
    }
}

impl Visit for RecordVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_text(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push_field(field.name(), format_args!("{value}"));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push_field(field.name(), format_args!("{value}"));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push_field(field.name(), format_args!("{value}"));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push_field(field.name(), format_args!("{value}"));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn Error + 'static)) {
        let rendered = render_error(value);
        if field.name() == "error" {
            self.error = Some(rendered);
        } else {
            self.push_field(field.name(), format_args!("{rendered}"));
        }
    }
}
