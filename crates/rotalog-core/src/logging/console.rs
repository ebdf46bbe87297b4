//! Console logger implementation

use std::io::Write;

use super::file::format_line;
use super::level::LogLevel;
use super::traits::{LogResult, Logger};

/// A logger that writes formatted lines to the console instead of a file
///
/// Uses the same line format and level gating as the file-backed logger.
/// INFO goes to stdout, DEBUG to stderr.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    level: LogLevel,
}

impl ConsoleLogger {
    /// Create a console logger gated at `level`
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured sink level
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

impl Logger for ConsoleLogger {
    fn debug(&mut self, message: &str) -> LogResult<()> {
        if self.level.enables(LogLevel::Debug) {
            let mut err = std::io::stderr();
            err.write_all(format_line(LogLevel::Debug, message).as_bytes())?;
            err.flush()?;
        }
        Ok(())
    }

    fn info(&mut self, message: &str) -> LogResult<()> {
        if self.level.enables(LogLevel::Info) {
            let mut out = std::io::stdout();
            out.write_all(format_line(LogLevel::Info, message).as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }
}
