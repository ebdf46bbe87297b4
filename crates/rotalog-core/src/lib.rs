//! Rotalog Core
//!
//! A minimal file logger. A flat key-value configuration file names a log
//! file, a logging level and a size threshold; the logger appends
//! timestamped, level-gated lines to that file and rotates to a fresh file
//! when the threshold would be exceeded.
//!
//! ```rust,ignore
//! use rotalog_core::{FileLogger, Logger, LoggerConfig};
//!
//! let config = LoggerConfig::load("config.txt")?;
//! let mut logger = FileLogger::new(config)?;
//!
//! logger.debug("cache warmed")?;
//! logger.info("listening on 0.0.0.0:8080")?;
//! ```

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, LoggerConfig};
pub use logging::{
    BoxedLogger, ConsoleLogger, FileLogger, LogError, LogLevel, LogResult, Logger, NoOpLogger,
};
