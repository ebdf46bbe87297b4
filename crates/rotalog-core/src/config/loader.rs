//! Line-oriented configuration file loader

use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::logging::LogLevel;

/// Errors that can occur while loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown logging level: {0}")]
    InvalidLevel(String),

    #[error("Invalid MAX-SIZE value {value:?}: {source}")]
    InvalidMaxSize {
        value: String,
        source: ParseIntError,
    },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Logger configuration, created once at startup and read-only afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Path of the log file to append to
    pub file: PathBuf,
    /// Configured logging level
    pub level: LogLevel,
    /// Size threshold in bytes that triggers rotation
    pub max_size: u64,
    /// Free-text format name; loaded and carried but unused by the write path
    pub format: String,
}

impl LoggerConfig {
    /// Load a configuration from the file at `path`.
    ///
    /// `FILE:`, `LEVEL:` and `MAX-SIZE:` are required; `FORMAT:` is
    /// optional and defaults to the empty string.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration text that has already been read.
    ///
    /// Lines not starting with a recognized prefix are silently ignored;
    /// values are trimmed of surrounding whitespace.
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let mut file = None;
        let mut level = None;
        let mut max_size = None;
        let mut format = None;

        for line in content.lines() {
            if let Some(value) = line.strip_prefix("FILE:") {
                file = Some(PathBuf::from(value.trim()));
            } else if let Some(value) = line.strip_prefix("LEVEL:") {
                level = Some(value.trim().parse::<LogLevel>()?);
            } else if let Some(value) = line.strip_prefix("MAX-SIZE:") {
                let value = value.trim();
                max_size = Some(value.parse::<u64>().map_err(|source| {
                    ConfigError::InvalidMaxSize {
                        value: value.to_string(),
                        source,
                    }
                })?);
            } else if let Some(value) = line.strip_prefix("FORMAT:") {
                format = Some(value.trim().to_string());
            }
        }

        Ok(Self {
            file: file.ok_or(ConfigError::MissingField("FILE"))?,
            level: level.ok_or(ConfigError::MissingField("LEVEL"))?,
            max_size: max_size.ok_or(ConfigError::MissingField("MAX-SIZE"))?,
            format: format.unwrap_or_default(),
        })
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    // Exact uppercase names only, matching the configuration format
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            other => Err(ConfigError::InvalidLevel(other.to_string())),
        }
    }
}
