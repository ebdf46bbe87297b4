//! No-op logger implementation

use super::traits::{LogResult, Logger};

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn debug(&mut self, _message: &str) -> LogResult<()> {
        Ok(())
    }

    fn info(&mut self, _message: &str) -> LogResult<()> {
        Ok(())
    }
}
