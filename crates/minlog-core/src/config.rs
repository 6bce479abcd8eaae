//! Logger configuration.

use std::env::{self, VarError};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::level::Level;

/// Environment variable holding the threshold, e.g. `MINLOG_LEVEL=info`.
pub const LEVEL_ENV_VAR: &str = "MINLOG_LEVEL";

/// Settings for a [`Logger`](crate::Logger).
///
/// Deserializable so applications can nest it in their own config:
///
/// ```
/// # use minlog_core::{Level, LogConfig};
/// let config: LogConfig = serde_json::from_str(r#"{ "level": "warn" }"#).unwrap();
/// assert_eq!(config.level, Level::Warn);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level that gets logged
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Trace,
        }
    }
}

impl LogConfig {
    /// Config with an explicit threshold.
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Read [`LEVEL_ENV_VAR`]. Unset means the default config.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_var(LEVEL_ENV_VAR)
    }

    /// Like [`LogConfig::from_env`], falling back to the default when the
    /// variable cannot be parsed.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_default()
    }

    fn from_var(var: &'static str) -> Result<Self, ConfigError> {
        match env::var(var) {
            Ok(value) => Self::parse_level(var, &value),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(var)),
        }
    }

    fn parse_level(var: &'static str, value: &str) -> Result<Self, ConfigError> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let level = value
            .parse()
            .map_err(|source| ConfigError::InvalidLevel { var, source })?;
        Ok(Self { level })
    }
}
