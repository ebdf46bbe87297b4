//! Configuration loading for the file logger
//!
//! The configuration is a flat, line-oriented text file with four
//! recognized prefixes (`FILE:`, `LEVEL:`, `MAX-SIZE:`, `FORMAT:`);
//! everything else is ignored.

mod loader;

pub use loader::{ConfigError, ConfigResult, LoggerConfig};
