//! Tracing subscriber setup
//!
//! The CLI logs to stderr. The TUI owns the terminal in raw mode, so it logs
//! to `teller.log` in the config directory instead.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing::Level;

use super::paths::TellerPaths;
use crate::error::TellerError;

/// Install a stderr subscriber for one-shot CLI commands
pub fn init_stderr(level: Level) -> Result<(), TellerError> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| TellerError::Config(format!("Failed to install logger: {}", e)))
}

/// Install a file subscriber for the TUI
pub fn init_file(paths: &TellerPaths, level: Level) -> Result<(), TellerError> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| TellerError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| TellerError::Config(format!("Failed to install logger: {}", e)))
}
