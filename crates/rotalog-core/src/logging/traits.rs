//! Logger trait definition

/// Errors that can occur while writing log messages
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Failure opening, writing or flushing the underlying file or stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reserved for a policy that refuses writes once the size threshold is
    /// reached instead of rotating. The rotating write path never returns
    /// this; it is a distinct outcome from an I/O failure.
    #[error("Maximum log file size reached: {0}")]
    MaxSizeReached(String),
}

pub type LogResult<T> = Result<T, LogError>;

/// Logger abstraction shared by every sink
///
/// Implementations:
/// - `FileLogger`: appends to a file, rotating on size overflow
/// - `ConsoleLogger`: writes to stdout/stderr
/// - `NoOpLogger`: silent sink for tests
///
/// Operations take `&mut self`: a logger owns its output resource
/// exclusively and is driven from a single thread.
pub trait Logger {
    /// Log a debug message. Emitted only when the sink level is `Debug`.
    fn debug(&mut self, message: &str) -> LogResult<()>;

    /// Log an info message. Emitted at both `Info` and `Debug` sink levels.
    fn info(&mut self, message: &str) -> LogResult<()>;
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Convenience macros for logging with format arguments
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}
