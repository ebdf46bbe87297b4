//! Sample entry point: load `config.txt` from the working directory, emit
//! one DEBUG and one INFO line through the file logger, exit.

use anyhow::Context;
use rotalog_core::{log_debug, log_info, FileLogger, Logger, LoggerConfig};

const CONFIG_PATH: &str = "config.txt";

fn main() -> anyhow::Result<()> {
    let config = LoggerConfig::load(CONFIG_PATH)
        .with_context(|| format!("failed to load {CONFIG_PATH}"))?;
    let mut logger = FileLogger::new(config).context("failed to open log file")?;

    log_debug!(logger, "Debug message")?;
    log_info!(logger, "Info message")?;

    Ok(())
}
