//! Level macros.
//!
//! Every level macro takes the same optional prefixes, in this order:
//!
//! ```text
//! info!("plain {}", value);
//! info!(category: "net", "tagged {}", value);
//! info!(error: &err, "with trace");
//! info!(category: "net", error: &err, "tagged with trace");
//! info!(logger: &my_logger, category: "net", "explicit logger");
//! ```
//!
//! The format arguments are only evaluated when the tier is enabled.

/// Log at an explicit [`Level`](crate::Level).
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $($rest:tt)+) => {{
        let __minlog_logger: &$crate::Logger = $logger;
        let __minlog_level: $crate::Level = $level;
        if __minlog_logger.enabled(__minlog_level) {
            $crate::__log_parts!(__minlog_logger, __minlog_level, None, None, $($rest)+);
        }
    }};
    ($level:expr, $($rest:tt)+) => {
        $crate::log!(logger: $crate::logger(), $level, $($rest)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_parts {
    ($logger:ident, $level:ident, $cat:expr, $err:expr, category: $category:expr, $($rest:tt)+) => {
        $crate::__log_parts!($logger, $level, Some($category), $err, $($rest)+)
    };
    ($logger:ident, $level:ident, $cat:expr, $err:expr, error: $error:expr, $($rest:tt)+) => {
        $crate::__log_parts!(
            $logger,
            $level,
            $cat,
            Some($error as &(dyn ::std::error::Error + 'static)),
            $($rest)+
        )
    };
    ($logger:ident, $level:ident, $cat:expr, $err:expr, $($arg:tt)+) => {{
        let __minlog_message = ::std::format!($($arg)+);
        $logger.dispatch(
            &$crate::Record::new($level, &__minlog_message)
                .with_category_opt($cat)
                .with_error_opt($err),
        );
    }};
}

/// Log at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($rest:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Error, $($rest)+)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Level::Error, $($rest)+)
    };
}

/// Log at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($rest:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Warn, $($rest)+)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Level::Warn, $($rest)+)
    };
}

/// Log at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($rest:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Info, $($rest)+)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Level::Info, $($rest)+)
    };
}

/// Log at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($rest:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Debug, $($rest)+)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Level::Debug, $($rest)+)
    };
}

/// Log at [`Level::Trace`](crate::Level::Trace).
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr, $($rest:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Trace, $($rest)+)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Level::Trace, $($rest)+)
    };
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::Arc;

    use crate::{BufferSink, Level, Logger};

    fn buffered(threshold: Level) -> (Logger, Arc<BufferSink>) {
        let buffer = Arc::new(BufferSink::default());
        (Logger::with_shared_sink(threshold, buffer.clone()), buffer)
    }

    #[test]
    fn test_all_four_shapes() {
        let (logger, buffer) = buffered(Level::Trace);
        let err = std::io::Error::new(std::io::ErrorKind::Other, "cause");

        crate::info!(logger: &logger, "plain {}", 1);
        crate::info!(logger: &logger, error: &err, "with error");
        crate::info!(logger: &logger, category: "catX", "hello");
        crate::info!(logger: &logger, category: "net", error: &err, "both");

        assert_eq!(
            buffer.lines(),
            vec!["plain 1", "with error\ncause", "[catX] hello", "[net] both\ncause"]
        );
    }

    #[test]
    fn test_disabled_tier_skips_argument_evaluation() {
        let (logger, buffer) = buffered(Level::Warn);
        let evaluated = Cell::new(0);
        let expensive = || {
            evaluated.set(evaluated.get() + 1);
            "costly"
        };

        crate::debug!(logger: &logger, "{}", expensive());
        crate::trace!(logger: &logger, category: "hot", "{}", expensive());
        assert_eq!(evaluated.get(), 0);
        assert!(buffer.is_empty());

        crate::error!(logger: &logger, "{}", expensive());
        assert_eq!(evaluated.get(), 1);
        assert_eq!(buffer.lines(), vec!["costly"]);
    }

    #[test]
    fn test_each_level_macro_uses_its_level() {
        let (logger, buffer) = buffered(Level::Trace);

        crate::error!(logger: &logger, "e");
        crate::warn!(logger: &logger, "w");
        crate::info!(logger: &logger, "i");
        crate::debug!(logger: &logger, "d");
        crate::trace!(logger: &logger, "t");
        crate::log!(logger: &logger, Level::Warn, "explicit");

        let levels: Vec<_> = buffer.records().into_iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![
                Level::Error,
                Level::Warn,
                Level::Info,
                Level::Debug,
                Level::Trace,
                Level::Warn,
            ]
        );
    }

    #[test]
    fn test_message_is_not_a_format_string_when_passed_through_args() {
        let (logger, buffer) = buffered(Level::Trace);
        let raw = "100% {literal}";
        crate::info!(logger: &logger, "{}", raw);
        assert_eq!(buffer.lines(), vec!["100% {literal}"]);
    }
}
