//! Path management for Teller
//!
//! Resolves where configuration and logs live.
//!
//! ## Path Resolution Order
//!
//! 1. `TELLER_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/teller-cli` on Linux, `%APPDATA%\teller-cli` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TellerError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "TELLER_CLI_DATA_DIR";

/// Manages all paths used by Teller
#[derive(Debug, Clone)]
pub struct TellerPaths {
    /// Base directory for all Teller files
    base_dir: PathBuf,
}

impl TellerPaths {
    /// Create a new TellerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, TellerError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TellerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("teller.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TellerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TellerError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a config file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, TellerError> {
    ProjectDirs::from("", "", "teller-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TellerError::Config("Could not determine a home directory".into()))
}
