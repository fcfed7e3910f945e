//! core::config::schema
//!
//! Configuration schema types.
//!
//! The same schema is used for both scopes (global and project). A field
//! left unset in one scope falls through to the next.
//!
//! # Validation
//!
//! Log level and format names are checked after parsing.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ConfigError;

/// Configuration file contents.
///
/// # Example
///
/// ```toml
/// registry_root = "Config"
/// content_root = "Content"
///
/// [log]
/// level = "debug"
/// format = "compact"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Directory searched for `*.PropRegistry.json`
    pub registry_root: Option<PathBuf>,

    /// Directory mesh asset paths resolve against
    pub content_root: Option<PathBuf>,

    /// Logging settings
    pub log: Option<LogSection>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(log) = &self.log {
            log.validate()?;
        }
        Ok(())
    }
}

/// Logging section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub level: Option<String>,

    /// One of `pretty`, `compact`, `json`
    pub format: Option<String>,
}

impl LogSection {
    pub const VALID_LEVELS: &'static [&'static str] = &["error", "warn", "info", "debug", "trace"];
    pub const VALID_FORMATS: &'static [&'static str] = &["pretty", "compact", "json"];

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.level {
            if !Self::VALID_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid log level '{}', must be one of: {}",
                    level,
                    Self::VALID_LEVELS.join(", ")
                )));
            }
        }
        if let Some(format) = &self.format {
            if !Self::VALID_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid log format '{}', must be one of: {}",
                    format,
                    Self::VALID_FORMATS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
