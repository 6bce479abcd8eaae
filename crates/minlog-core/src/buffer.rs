//! In-memory capture of log records.
//!
//! Keeps the most recent records in a bounded queue so tests and
//! diagnostics screens can look at what was logged:
//!
//! ```text
//! BufferSink
//! ├── records: VecDeque<CapturedRecord>   (oldest evicted at capacity)
//! └── capacity: usize                      (default 256)
//! ```

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::record::{render_error, Record};
use crate::sink::Sink;

/// Default number of records kept.
const DEFAULT_CAPACITY: usize = 256;

/// Owned copy of a record as it reached the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedRecord {
    /// When the sink received the record
    pub ts: DateTime<Utc>,

    pub level: Level,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub message: String,

    /// Rendered error trace, if an error was attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CapturedRecord {
    /// Owned copy of `record`, stamped with the current UTC time.
    pub fn from_record(record: &Record<'_>) -> Self {
        Self {
            ts: Utc::now(),
            level: record.level(),
            category: record.category().map(str::to_string),
            message: record.message().to_string(),
            error: record.error().map(render_error),
        }
    }

    /// `[category] message` followed by the error trace, without any
    /// time or level prefix.
    pub fn line(&self) -> String {
        let mut line = String::new();
        if let Some(category) = &self.category {
            line.push('[');
            line.push_str(category);
            line.push_str("] ");
        }
        line.push_str(&self.message);
        if let Some(error) = &self.error {
            line.push('\n');
            line.push_str(error);
        }
        line
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a line produced by [`CapturedRecord::to_json_line`].
    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Bounded in-memory sink.
#[derive(Debug)]
pub struct BufferSink {
    records: RwLock<VecDeque<CapturedRecord>>,
    capacity: usize,
}

impl BufferSink {
    /// A buffer keeping the newest `capacity` records (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: RwLock::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY))),
            capacity,
        }
    }

    /// Maximum number of records kept before the oldest is evicted.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the captured records, oldest first.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.read().iter().cloned().collect()
    }

    /// Captured records rendered with [`CapturedRecord::line`].
    pub fn lines(&self) -> Vec<String> {
        self.records.read().iter().map(CapturedRecord::line).collect()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.records.write().clear();
    }

    /// Remove and return everything captured so far.
    pub fn drain(&self) -> Vec<CapturedRecord> {
        self.records.write().drain(..).collect()
    }
}

impl Default for BufferSink {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Sink for BufferSink {
    fn log(&self, record: &Record<'_>) {
        let captured = CapturedRecord::from_record(record);
        let mut records = self.records.write();
        if records.len() >= self.capacity {
            records.pop_front();
        }
        records.push_back(captured);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_in_order() {
        let sink = BufferSink::default();
        sink.log(&Record::new(Level::Info, "one"));
        sink.log(&Record::new(Level::Warn, "two").with_category("net"));

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "one");
        assert_eq!(records[1].level, Level::Warn);
        assert_eq!(sink.lines(), vec!["one".to_string(), "[net] two".to_string()]);
    }

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let sink = BufferSink::new(2);
        for msg in ["a", "b", "c"] {
            sink.log(&Record::new(Level::Debug, msg));
        }
        let messages: Vec<_> = sink.records().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_still_keeps_latest() {
        let sink = BufferSink::new(0);
        sink.log(&Record::new(Level::Info, "a"));
        sink.log(&Record::new(Level::Info, "b"));
        assert_eq!(sink.capacity(), 1);
        assert_eq!(sink.lines(), vec!["b".to_string()]);
    }

    #[test]
    fn test_drain_empties_buffer() {
        let sink = BufferSink::default();
        sink.log(&Record::new(Level::Error, "gone"));
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_error_is_rendered() {
        let sink = BufferSink::default();
        let err = std::io::Error::new(std::io::ErrorKind::Other, "bad");
        sink.log(&Record::new(Level::Error, "oops").with_error(&err));
        assert_eq!(sink.lines(), vec!["oops\nbad".to_string()]);
    }

    #[test]
    fn test_json_line_skips_absent_fields() {
        let sink = BufferSink::default();
        sink.log(&Record::new(Level::Info, "Connected to peer"));
        let json = sink.records()[0].to_json_line().unwrap();

        assert!(json.contains("\"level\":\"info\""));
        assert!(json.contains("\"message\":\"Connected to peer\""));
        assert!(!json.contains("category"));
        assert!(!json.contains("error"));

        let parsed = CapturedRecord::from_json_line(&json).unwrap();
        assert_eq!(parsed, sink.records()[0]);
    }
}
