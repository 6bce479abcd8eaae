//! Default sink: elapsed-time prefixed lines on stdout.
//!
//! ```text
//! 01:05  INFO: [net] connected to peer
//! 00:9 ERROR: handshake failed
//! Caused by: connection reset by peer
//! ```

use std::fmt::Write as FmtWrite;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::level::Level;
use crate::record::{render_error, Record};
use crate::sink::Sink;

/// Where a [`ConsoleSink`] writes.
enum Output {
    Stdout,
    Writer(Mutex<Box<dyn Write + Send>>),
}

/// The default sink.
///
/// Every line starts with the time elapsed since the sink was built, then a
/// fixed-width severity tag, the optional `[category]`, the message and
/// finally the optional error trace on the following lines.
pub struct ConsoleSink {
    started: Instant,
    output: Output,
}

impl ConsoleSink {
    /// A sink writing to stdout, with its elapsed-time baseline set to now.
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    /// A sink writing to stdout with an explicit baseline.
    pub fn started_at(started: Instant) -> Self {
        Self {
            started,
            output: Output::Stdout,
        }
    }

    /// Write to `writer` instead of stdout.
    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.output = Output::Writer(Mutex::new(Box::new(writer)));
        self
    }

    /// Baseline the elapsed-time prefix is measured from.
    pub fn started(&self) -> Instant {
        self.started
    }

    /// Render `record` as if it arrived at `now`. No trailing newline.
    pub fn render_at(&self, record: &Record<'_>, now: Instant) -> String {
        let mut line = String::with_capacity(256);

        line.push_str(&format_elapsed(now.saturating_duration_since(self.started)));
        line.push_str(tag(record.level()));

        if let Some(category) = record.category() {
            line.push('[');
            line.push_str(category);
            line.push_str("] ");
        }

        line.push_str(record.message());

        if let Some(error) = record.error() {
            line.push('\n');
            line.push_str(&render_error(error));
        }

        line
    }

    /// Render `record` against the current instant.
    pub fn render(&self, record: &Record<'_>) -> String {
        self.render_at(record, Instant::now())
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        match &self.output {
            Output::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{line}")
            }
            Output::Writer(writer) => {
                let mut writer = writer.lock();
                writeln!(writer, "{line}")?;
                writer.flush()
            }
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let output = match self.output {
            Output::Stdout => "stdout",
            Output::Writer(_) => "writer",
        };
        f.debug_struct("ConsoleSink")
            .field("started", &self.started)
            .field("output", &output)
            .finish()
    }
}

impl Sink for ConsoleSink {
    fn log(&self, record: &Record<'_>) {
        let line = self.render(record);
        // Output failures (closed pipe etc.) are not ours to handle.
        let _ = self.write_line(&line);
    }
}

/// Fixed-width severity tag, including the surrounding spaces.
fn tag(level: Level) -> &'static str {
    match level {
        Level::Error => " ERROR: ",
        Level::Warn => "  WARN: ",
        Level::Info => "  INFO: ",
        Level::Debug => " DEBUG: ",
        Level::Trace => " TRACE: ",
        Level::None => "",
    }
}

/// Format an elapsed duration as `MM:SS`.
///
/// Minutes are whole minutes, seconds are the remainder modulo 60. A value
/// only gets a leading zero when it is below 9, so nine seconds render as
/// `00:9` while eight render as `00:08`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    let minutes = millis / (1000 * 60);
    let seconds = millis / 1000 % 60;

    let mut out = String::with_capacity(8);
    push_padded(&mut out, minutes);
    out.push(':');
    push_padded(&mut out, seconds);
    out
}

fn push_padded(out: &mut String, value: u128) {
    if value < 9 {
        out.push('0');
    }
    let _ = write!(out, "{value}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    fn at(sink: &ConsoleSink, millis: u64) -> Instant {
        sink.started() + Duration::from_millis(millis)
    }

    /// Writer that shares its buffer so tests can read what was written.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    #[test]
    fn test_elapsed_minutes_and_seconds() {
        assert_eq!(format_elapsed(Duration::from_millis(65_000)), "01:05");
        assert_eq!(format_elapsed(Duration::ZERO), "00:00");
        assert_eq!(format_elapsed(Duration::from_millis(999)), "00:00");
    }

    #[test]
    fn test_elapsed_pads_only_below_nine() {
        assert_eq!(format_elapsed(Duration::from_millis(8_000)), "00:08");
        assert_eq!(format_elapsed(Duration::from_millis(9_000)), "00:9");
        assert_eq!(format_elapsed(Duration::from_millis(10_000)), "00:10");
        assert_eq!(format_elapsed(Duration::from_secs(9 * 60)), "9:00");
        assert_eq!(format_elapsed(Duration::from_secs(12 * 60 + 30)), "12:30");
    }

    #[test]
    fn test_elapsed_past_an_hour() {
        assert_eq!(format_elapsed(Duration::from_secs(125 * 60 + 1)), "125:01");
    }

    #[test]
    fn test_tags_are_fixed_width() {
        for level in Level::TIERS {
            assert_eq!(tag(level).len(), 8, "tag for {level}");
            assert!(tag(level).ends_with(": "));
        }
    }

    #[test]
    fn test_none_level_has_no_tag() {
        let sink = ConsoleSink::new();
        let line = sink.render_at(&Record::new(Level::None, "x"), at(&sink, 0));
        assert_eq!(line, "00:00x");
    }

    #[test]
    fn test_render_plain_message() {
        let sink = ConsoleSink::new();
        let record = Record::new(Level::Info, "hello");
        assert_eq!(sink.render_at(&record, at(&sink, 65_000)), "01:05  INFO: hello");
    }

    #[test]
    fn test_render_with_category() {
        let sink = ConsoleSink::new();
        let record = Record::new(Level::Debug, "hello").with_category("catX");
        let line = sink.render_at(&record, at(&sink, 0));
        assert_eq!(line, "00:00 DEBUG: [catX] hello");
    }

    #[test]
    fn test_render_without_category_has_no_brackets() {
        let sink = ConsoleSink::new();
        let line = sink.render_at(&Record::new(Level::Warn, "hello"), at(&sink, 0));
        assert!(!line.contains('['));
        assert!(line.ends_with("  WARN: hello"));
    }

    #[test]
    fn test_render_with_error_appends_trace() {
        let sink = ConsoleSink::new();
        let err = io::Error::new(io::ErrorKind::Other, "connection reset  ");
        let record = Record::new(Level::Error, "handshake failed").with_error(&err);
        assert_eq!(
            sink.render_at(&record, at(&sink, 3_000)),
            "00:03 ERROR: handshake failed\nconnection reset"
        );
    }

    #[test]
    fn test_render_is_stable_apart_from_prefix() {
        let sink = ConsoleSink::new();
        let record = Record::new(Level::Trace, "tick").with_category("loop");
        let first = sink.render_at(&record, at(&sink, 1_000));
        let second = sink.render_at(&record, at(&sink, 61_000));
        assert_eq!(first.split_once(' ').unwrap().1, second.split_once(' ').unwrap().1);
        assert_ne!(first, second);
    }

    #[test]
    fn test_log_writes_one_terminated_block() {
        let buf = SharedBuf::default();
        let sink = ConsoleSink::new().with_writer(buf.clone());
        let err = io::Error::new(io::ErrorKind::NotFound, "missing");

        sink.log(&Record::new(Level::Info, "first"));
        sink.log(&Record::new(Level::Error, "second").with_error(&err));

        let out = buf.contents();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("  INFO: first"));
        assert!(lines[1].ends_with(" ERROR: second"));
        assert_eq!(lines[2], "missing");
        assert!(out.ends_with('\n'));
    }
}
