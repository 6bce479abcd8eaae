//! Error types for minlog

use thiserror::Error;

/// Failure to interpret text or a number as a [`Level`](crate::Level).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseLevelError {
    /// Name did not match any level (case-insensitive)
    #[error("Unknown level name: {0:?}")]
    UnknownName(String),

    /// Numeric rank outside 1..=6
    #[error("Level rank out of range: {0}")]
    RankOutOfRange(u8),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The level environment variable held something we could not parse
    #[error("Invalid {var} value: {source}")]
    InvalidLevel {
        var: &'static str,
        #[source]
        source: ParseLevelError,
    },

    /// The level environment variable was not valid unicode
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
}
