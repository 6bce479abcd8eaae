//! Log records handed from the gate to a sink.

use std::error::Error;
use std::fmt::Write;

use crate::level::Level;

/// A borrowed, short-lived log record.
///
/// Built at the call site, rendered synchronously by the installed sink, then
/// dropped. Nothing here is validated: the message is passed through as-is.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    level: Level,
    category: Option<&'a str>,
    message: &'a str,
    error: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Record<'a> {
    /// A record at `level` with no category or error.
    pub fn new(level: Level, message: &'a str) -> Self {
        Self {
            level,
            category: None,
            message,
            error: None,
        }
    }

    /// Tag the record with a category, rendered as `[category] `.
    pub fn with_category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }

    /// Like [`Record::with_category`], leaving the record untouched on `None`.
    pub fn with_category_opt(mut self, category: Option<&'a str>) -> Self {
        self.category = category;
        self
    }

    /// Attach an error whose trace is appended below the message.
    pub fn with_error(mut self, error: &'a (dyn Error + 'static)) -> Self {
        self.error = Some(error);
        self
    }

    /// Like [`Record::with_error`], leaving the record untouched on `None`.
    pub fn with_error_opt(mut self, error: Option<&'a (dyn Error + 'static)>) -> Self {
        self.error = error;
        self
    }

    /// Severity the record was logged at.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Category set with [`Record::with_category`], if any.
    pub fn category(&self) -> Option<&'a str> {
        self.category
    }

    /// The message, exactly as passed in.
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// The attached error, if any.
    pub fn error(&self) -> Option<&'a (dyn Error + 'static)> {
        self.error
    }
}

impl std::fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("category", &self.category)
            .field("message", &self.message)
            .field("error", &self.error.map(|e| e.to_string()))
            .finish()
    }
}

/// Render an error and its `source()` chain as a trimmed block of text.
///
/// ```text
/// failed to load config
/// Caused by: permission denied
/// ```
pub fn render_error(error: &(dyn Error + 'static)) -> String {
    let mut out = String::with_capacity(128);
    let _ = write!(out, "{error}");

    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(out, "\nCaused by: {cause}");
        source = cause.source();
    }

    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Wrapped {
        inner: io::Error,
    }

    impl std::fmt::Display for Wrapped {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "failed to load config")
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.inner)
        }
    }

    #[test]
    fn test_builder_sets_fields() {
        let err = io::Error::new(io::ErrorKind::Other, "boom");
        let record = Record::new(Level::Warn, "disk almost full")
            .with_category("storage")
            .with_error(&err);

        assert_eq!(record.level(), Level::Warn);
        assert_eq!(record.category(), Some("storage"));
        assert_eq!(record.message(), "disk almost full");
        assert_eq!(record.error().map(|e| e.to_string()), Some("boom".into()));
    }

    #[test]
    fn test_defaults_are_absent() {
        let record = Record::new(Level::Info, "");
        assert!(record.category().is_none());
        assert!(record.error().is_none());
        assert_eq!(record.message(), "");
    }

    #[test]
    fn test_render_error_walks_sources() {
        let err = Wrapped {
            inner: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            render_error(&err),
            "failed to load config\nCaused by: permission denied"
        );
    }

    #[test]
    fn test_render_error_trims_trailing_whitespace() {
        let err = io::Error::new(io::ErrorKind::Other, "trailing \n\t ");
        assert_eq!(render_error(&err), "trailing");
    }
}
