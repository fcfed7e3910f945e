//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! There are two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Per-project overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$PROPREG_CONFIG` if set
//! 2. `<config dir>/propreg/config.toml` (e.g. `~/.config/propreg/config.toml`)
//!
//! # Project Config Location
//!
//! `<project>/.propreg/config.toml`. Relative roots in either file are
//! resolved against the project directory.
//!
//! # Example
//!
//! ```no_run
//! use prop_registry::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Path::new("/path/to/project")).unwrap();
//! let config = result.config;
//!
//! println!("Registry root: {}", config.registry_root().display());
//! println!("Log level: {}", config.log_level());
//! ```

pub mod schema;

pub use schema::{FileConfig, LogSection};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::paths::RegistryPaths;

/// Environment variable naming an explicit global config file.
pub const CONFIG_ENV: &str = "PROPREG_CONFIG";

/// Default registry root, relative to the project directory.
pub const DEFAULT_REGISTRY_ROOT: &str = "Config";

/// Default content root, relative to the project directory.
pub const DEFAULT_CONTENT_ROOT: &str = "Content";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence automatically: project over global over
/// built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: FileConfig,
    /// Project configuration (if present)
    pub project: Option<FileConfig>,
    /// Directory relative roots are resolved against
    base_dir: PathBuf,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the project config file (if loaded)
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration for a project directory.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or
    /// hold invalid values. Missing config files are not an error.
    pub fn load(project_dir: &Path) -> Result<ConfigLoadResult, ConfigError> {
        let global_path = Self::find_global();
        Self::load_from(global_path.as_deref(), project_dir)
    }

    /// Load configuration with an explicit global config file.
    pub fn load_from(
        global_path: Option<&Path>,
        project_dir: &Path,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let (global, global_path) = match global_path {
            Some(path) if path.exists() => (Self::read_config(path)?, Some(path.to_path_buf())),
            _ => (FileConfig::default(), None),
        };

        let project_file = Self::project_config_path(project_dir);
        let (project, project_path) = if project_file.exists() {
            (Some(Self::read_config(&project_file)?), Some(project_file))
        } else {
            (None, None)
        };

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                project,
                base_dir: project_dir.to_path_buf(),
                global_path,
                project_path,
            },
        })
    }

    /// Locate the global config file, if any.
    fn find_global() -> Option<PathBuf> {
        // 1. Check $PROPREG_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        // 2. Check the platform config dir
        dirs::config_dir().map(|dir| dir.join("propreg/config.toml"))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for project config.
    ///
    /// Returns `.propreg/config.toml` relative to the given project directory.
    pub fn project_config_path(project_dir: &Path) -> PathBuf {
        project_dir.join(".propreg/config.toml")
    }

    /// Write project config atomically.
    ///
    /// Creates parent directories if needed. Uses atomic write
    /// (write to temp file, then rename) to prevent corruption.
    pub fn write_project(project_dir: &Path, config: &FileConfig) -> Result<PathBuf, ConfigError> {
        let path = Self::project_config_path(project_dir);
        Self::write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write a config file atomically.
    fn write_config_atomic(path: &Path, config: &FileConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        // Write to temp file in same directory (for atomic rename)
        let temp_path = path.with_extension("toml.tmp");
        let result = Self::write_and_rename(&temp_path, path, &contents);
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }

    fn write_and_rename(temp_path: &Path, path: &Path, contents: &str) -> Result<(), ConfigError> {
        let mut file = fs::File::create(temp_path).map_err(write_error(temp_path))?;
        file.write_all(contents.as_bytes())
            .map_err(write_error(temp_path))?;
        file.sync_all().map_err(write_error(temp_path))?;
        drop(file);

        fs::rename(temp_path, path).map_err(write_error(path))
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    fn pick<T>(&self, field: impl Fn(&FileConfig) -> Option<T>) -> Option<T> {
        self.project
            .as_ref()
            .and_then(&field)
            .or_else(|| field(&self.global))
    }

    fn resolve(&self, path: PathBuf) -> PathBuf {
        if path.is_absolute() {
            path
        } else {
            self.base_dir.join(path)
        }
    }

    /// Get the registry root.
    ///
    /// Defaults to `<project>/Config`.
    pub fn registry_root(&self) -> PathBuf {
        let root = self
            .pick(|c| c.registry_root.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REGISTRY_ROOT));
        self.resolve(root)
    }

    /// Get the content root.
    ///
    /// Defaults to `<project>/Content`.
    pub fn content_root(&self) -> PathBuf {
        let root = self
            .pick(|c| c.content_root.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_ROOT));
        self.resolve(root)
    }

    /// Both roots as registry paths.
    pub fn paths(&self) -> RegistryPaths {
        RegistryPaths::new(self.registry_root(), self.content_root())
    }

    /// Get the log level name.
    ///
    /// Defaults to `"info"` if not configured.
    pub fn log_level(&self) -> String {
        self.pick(|c| c.log.as_ref().and_then(|l| l.level.clone()))
            .unwrap_or_else(|| "info".to_string())
    }

    /// Get the log format name.
    ///
    /// Defaults to `"pretty"` if not configured.
    pub fn log_format(&self) -> String {
        self.pick(|c| c.log.as_ref().and_then(|l| l.format.clone()))
            .unwrap_or_else(|| "pretty".to_string())
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError {
    let path = path.to_path_buf();
    move |source| ConfigError::WriteError { path, source }
}
