//! Logging sinks and the level-gated write path
//!
//! The `Logger` trait is the seam every sink implements:
//! - `FileLogger`: appends to a file, rotating on size overflow
//! - `ConsoleLogger`: writes to stdout/stderr
//! - `NoOpLogger`: discards everything

mod console;
mod file;
mod level;
mod noop;
mod traits;

pub use console::ConsoleLogger;
pub use file::FileLogger;
pub use level::LogLevel;
pub use noop::NoOpLogger;
pub use traits::{BoxedLogger, LogError, LogResult, Logger};
