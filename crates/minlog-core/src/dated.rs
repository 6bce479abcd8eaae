//! Alternate sink with wall-clock timestamps and numeric levels.

use std::io::{self, Write};

use chrono::{DateTime, Local, TimeZone};

use crate::record::{render_error, Record};
use crate::sink::Sink;

/// `Www Mmm dd HH:MM:SS <offset> yyyy`
const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %:z %Y";

/// Writes `<timestamp> <rank>[<category>] <message>` lines to stdout.
///
/// A record without a category renders an empty `[]`.
///
/// The zone is printed as a numeric offset (`+02:00`), not an abbreviation
/// such as `CET`: chrono only knows offsets for the local zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatedSink;

impl DatedSink {
    /// A sink writing to stdout.
    pub fn new() -> Self {
        Self
    }

    /// Render `record` stamped with `now`. No trailing newline.
    pub fn render_at<Tz>(&self, record: &Record<'_>, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let mut line = String::with_capacity(256);
        line.push_str(&now.format(TIMESTAMP_FORMAT).to_string());
        line.push(' ');
        line.push_str(&record.level().rank().to_string());
        line.push('[');
        line.push_str(record.category().unwrap_or_default());
        line.push_str("] ");
        line.push_str(record.message());

        if let Some(error) = record.error() {
            line.push('\n');
            line.push_str(&render_error(error));
        }

        line
    }

    /// Render `record` stamped with the local time.
    pub fn render(&self, record: &Record<'_>) -> String {
        self.render_at(record, &Local::now())
    }
}

impl Sink for DatedSink {
    fn log(&self, record: &Record<'_>) {
        let line = self.render(record);
        let _ = writeln!(io::stdout().lock(), "{line}");
    }
}
