//! File-backed logger with size-based rotation

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::level::LogLevel;
use super::traits::{LogResult, Logger};
use crate::config::LoggerConfig;

/// A logger that appends formatted lines to a file and switches to a fresh
/// rotation file once the configured size threshold would be exceeded
///
/// The logger owns its write handle exclusively. Rotation closes the handle
/// by replacing it, and the last handle closes when the logger is dropped.
/// `current_size` always reflects the byte length of the currently open
/// file: its length at open time plus every line appended since.
#[derive(Debug)]
pub struct FileLogger {
    config: LoggerConfig,
    current_path: PathBuf,
    file: File,
    current_size: u64,
}

impl FileLogger {
    /// Open (or create) the configured log file in append mode
    pub fn new(config: LoggerConfig) -> LogResult<Self> {
        let file = open_append(&config.file)?;
        let current_size = file.metadata()?.len();
        Ok(Self {
            current_path: config.file.clone(),
            config,
            file,
            current_size,
        })
    }

    /// The configuration this logger was built from
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Path of the file currently being appended to
    ///
    /// Starts as the configured path and moves to a rotation file after the
    /// first overflow.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Byte length of the currently open file
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    /// Single write path behind `debug` and `info`.
    ///
    /// Both the overflow check and the size increment use the formatted
    /// line's byte length. The counter only moves after a successful write,
    /// and the write is flushed before returning.
    fn write_log(&mut self, level: LogLevel, message: &str) -> LogResult<()> {
        let line = format_line(level, message);
        if self.current_size + line.len() as u64 > self.config.max_size {
            self.rotate()?;
        }
        self.file.write_all(line.as_bytes())?;
        self.file.flush()?;
        self.current_size += line.len() as u64;
        Ok(())
    }

    /// Continue logging in a fresh rotation file next to the configured log
    /// path.
    ///
    /// If opening the rotation file fails, the old handle stays in place and
    /// the logger remains usable.
    fn rotate(&mut self) -> LogResult<()> {
        let path = self.next_rotation_path();
        let file = open_append(&path)?;
        self.current_size = file.metadata()?.len();
        self.file = file;
        self.current_path = path;
        Ok(())
    }

    fn next_rotation_path(&self) -> PathBuf {
        let stamp = Local::now().format("%d.%m.%Y-%H:%M").to_string();
        self.rotation_path_for(&stamp)
    }

    /// Pick an unused rotation file name for a minute stamp.
    ///
    /// Two rotations within the same clock minute get distinct files via the
    /// numeric suffix instead of silently re-appending to the first one.
    fn rotation_path_for(&self, stamp: &str) -> PathBuf {
        let dir = self.config.file.parent().unwrap_or_else(|| Path::new(""));
        let mut candidate = dir.join(format!("Log_{stamp}.txt"));
        let mut n = 1u32;
        while candidate.exists() {
            candidate = dir.join(format!("Log_{stamp}.{n}.txt"));
            n += 1;
        }
        candidate
    }
}

impl Logger for FileLogger {
    fn debug(&mut self, message: &str) -> LogResult<()> {
        if self.config.level.enables(LogLevel::Debug) {
            self.write_log(LogLevel::Debug, message)?;
        }
        Ok(())
    }

    fn info(&mut self, message: &str) -> LogResult<()> {
        if self.config.level.enables(LogLevel::Info) {
            self.write_log(LogLevel::Info, message)?;
        }
        Ok(())
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Format one output line: `[HH:mm:ss][LEVEL] Message: <text>\n`
pub(crate) fn format_line(level: LogLevel, message: &str) -> String {
    format!(
        "[{}][{}] Message: {}\n",
        Local::now().format("%H:%M:%S"),
        level,
        message
    )
}
