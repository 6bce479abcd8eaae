//! Severity levels and the per-tier enable flags derived from a threshold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseLevelError;

/// Message severity, ordered from most verbose to silent.
///
/// `None` is a threshold sentinel: no message is ever logged at `None`, so a
/// threshold of `None` disables every tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// A lot of information, usually only needed when chasing a problem
    Trace = 1,
    /// Useful during development
    Debug = 2,
    /// Generally useful to see
    Info = 3,
    /// Something is off but the application keeps working correctly
    Warn = 4,
    /// The application may no longer work correctly
    Error = 5,
    /// Log nothing
    None = 6,
}

impl Level {
    /// The five levels a message can be logged at, most severe first.
    pub const TIERS: [Level; 5] = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Numeric rank. Lower is more verbose.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Level with numeric rank `rank`, or `RankOutOfRange` outside `1..=6`.
    pub fn from_rank(rank: u8) -> Result<Self, ParseLevelError> {
        match rank {
            1 => Ok(Level::Trace),
            2 => Ok(Level::Debug),
            3 => Ok(Level::Info),
            4 => Ok(Level::Warn),
            5 => Ok(Level::Error),
            6 => Ok(Level::None),
            other => Err(ParseLevelError::RankOutOfRange(other)),
        }
    }

    /// Whether a message at `self` passes a gate set to `threshold`.
    pub const fn passes(self, threshold: Level) -> bool {
        !matches!(threshold, Level::None) && self.rank() >= threshold.rank()
    }

    /// Upper-case name, as shown in rendered output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::None => "NONE",
        }
    }

    /// Bit used by [`LevelFlags::bits`].
    pub(crate) const fn bit(self) -> u8 {
        1 << self.rank()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts a level name in any case, or a rank `1`..=`6`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(rank) = trimmed.parse::<u8>() {
            return Level::from_rank(rank);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "none" | "off" => Ok(Level::None),
            _ => Err(ParseLevelError::UnknownName(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = ParseLevelError;

    fn try_from(rank: u8) -> Result<Self, ParseLevelError> {
        Level::from_rank(rank)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.rank()
    }
}

/// Per-tier enable flags, computed once from a threshold.
///
/// Check a flag before doing expensive work to build a message:
///
/// ```
/// use minlog_core::{Level, LevelFlags};
///
/// let flags = LevelFlags::for_threshold(Level::Info);
/// if flags.debug {
///     unreachable!("debug is below the threshold");
/// }
/// assert!(flags.warn);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelFlags {
    /// `Error` messages pass the gate.
    pub error: bool,
    pub warn: bool,
    pub info: bool,
    pub debug: bool,
    pub trace: bool,
}

impl LevelFlags {
    /// Flags for a gate set to `threshold`: every tier at or above it.
    pub const fn for_threshold(threshold: Level) -> Self {
        Self {
            error: Level::Error.passes(threshold),
            warn: Level::Warn.passes(threshold),
            info: Level::Info.passes(threshold),
            debug: Level::Debug.passes(threshold),
            trace: Level::Trace.passes(threshold),
        }
    }

    /// Flag for a single level. `None` is never enabled.
    pub const fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Error => self.error,
            Level::Warn => self.warn,
            Level::Info => self.info,
            Level::Debug => self.debug,
            Level::Trace => self.trace,
            Level::None => false,
        }
    }

    /// Packed form, one bit per enabled tier (bit index = rank).
    pub const fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.error {
            bits |= Level::Error.bit();
        }
        if self.warn {
            bits |= Level::Warn.bit();
        }
        if self.info {
            bits |= Level::Info.bit();
        }
        if self.debug {
            bits |= Level::Debug.bit();
        }
        if self.trace {
            bits |= Level::Trace.bit();
        }
        bits
    }

    /// Inverse of [`LevelFlags::bits`]. Unknown bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            error: bits & Level::Error.bit() != 0,
            warn: bits & Level::Warn.bit() != 0,
            info: bits & Level::Info.bit() != 0,
            debug: bits & Level::Debug.bit() != 0,
            trace: bits & Level::Trace.bit() != 0,
        }
    }
}
