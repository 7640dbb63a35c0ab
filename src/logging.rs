//! Logging setup.
//!
//! The game owns the terminal, so log lines never go to stdout or stderr:
//! they are appended to the file named by [`Config::log_path`]. Without a log
//! path no subscriber is installed and `tracing` events are dropped.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::config::Config;

/// Install the global subscriber. Returns whether logging is enabled.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    init_file(path, config.level_filter())?;
    Ok(true)
}

fn init_file(path: &Path, level: LevelFilter) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(level)
        .try_init()
        .context("installing log subscriber")?;

    Ok(())
}
