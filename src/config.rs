//! Program-wide defaults loaded from a TOML configuration file.
//!
//! Every setting has a built-in default, so a configuration file is optional.
//! Command-line flags take precedence over anything set here.
//!
//! # Configuration File Format
//!
//! ```toml
//! [logging]
//! level = "info"
//! file = "/var/log/magrename.log"
//!
//! [output]
//! color = true
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// Name of the per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".magrenamerc.toml";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found at the specified path.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Invalid TOML syntax or structure.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    /// Log level name that is not one of error, warn, info, debug, trace.
    #[error("Invalid log level '{0}': expected error, warn, info, debug or trace")]
    InvalidLevel(String),
    /// IO error while reading configuration.
    #[error("IO error reading configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RenamerConfig {
    #[serde(default)]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

/// Logging defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingSettings {
    /// Level used when no `-v` flag is given. Defaults to "info".
    #[serde(default = "default_level")]
    pub level: String,

    /// Append log lines to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

/// Console output settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputSettings {
    /// Color the closing summary. Defaults to true.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl RenamerConfig {
    /// Load configuration from a file, with fallback to defaults.
    ///
    /// Attempts to load configuration in the following order:
    /// 1. If `config_path` is provided, load from that file
    /// 2. Look for `.magrenamerc.toml` in the current directory
    /// 3. Look for `~/.config/magrename/config.toml` in home directory
    /// 4. Fall back to default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly provided file cannot be read, or if
    /// any discovered file is not valid.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Ok(home) = std::env::var("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("magrename")
                .join("config.toml");
            if home_config.exists() {
                return Self::load_from_file(&home_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist,
    /// `ConfigError::Invalid` if TOML parsing fails and
    /// `ConfigError::InvalidLevel` if the log level is unknown.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text and validate it.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.logging.level_filter()?;
        Ok(config)
    }
}

impl LoggingSettings {
    /// Parses the configured level name.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        parse_level(&self.level)
    }
}

/// Parses a level name case-insensitively. "warning" and "critical" are
/// accepted as aliases for warn and error.
pub fn parse_level(name: &str) -> Result<LevelFilter, ConfigError> {
    match name.to_lowercase().as_str() {
        "off" => Ok(LevelFilter::OFF),
        "error" | "critical" => Ok(LevelFilter::ERROR),
        "warn" | "warning" => Ok(LevelFilter::WARN),
        "info" => Ok(LevelFilter::INFO),
        "debug" => Ok(LevelFilter::DEBUG),
        "trace" => Ok(LevelFilter::TRACE),
        _ => Err(ConfigError::InvalidLevel(name.to_string())),
    }
}
