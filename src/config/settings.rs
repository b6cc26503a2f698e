//! User settings for Teller
//!
//! Which ledger endpoint to talk to, how money is labelled, and how long
//! notifications stay on screen.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::TellerPaths;
use crate::error::TellerError;

/// User settings for Teller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// URL of the ledger endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Currency glyph prefixed to every amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How long a notification stays fully visible
    #[serde(default = "default_notification_display_ms")]
    pub notification_display_ms: u64,

    /// Length of the fade step before the slot clears
    #[serde(default = "default_notification_fade_ms")]
    pub notification_fade_ms: u64,

    /// TUI redraw interval
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_endpoint() -> String {
    "http://localhost/cgi-bin/bank.cgi".to_string()
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_notification_display_ms() -> u64 {
    5000
}

fn default_notification_fade_ms() -> u64 {
    150
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            endpoint: default_endpoint(),
            currency_symbol: default_currency(),
            notification_display_ms: default_notification_display_ms(),
            notification_fade_ms: default_notification_fade_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TellerPaths) -> Result<Self, TellerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TellerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TellerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TellerPaths) -> Result<(), TellerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TellerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TellerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Notification visibility before the fade step
    pub fn notification_display(&self) -> Duration {
        Duration::from_millis(self.notification_display_ms)
    }

    /// Notification fade step
    pub fn notification_fade(&self) -> Duration {
        Duration::from_millis(self.notification_fade_ms)
    }

    /// TUI tick interval
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// Parsed log level, falling back to WARN on an unknown name
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::WARN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.notification_display(), Duration::from_secs(5));
        assert_eq!(settings.notification_fade(), Duration::from_millis(150));
        assert_eq!(settings.tracing_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TellerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            endpoint: "http://bank.test/api".into(),
            log_level: "debug".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.endpoint, "http://bank.test/api");
        assert_eq!(loaded.tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"endpoint":"http://x"}"#).unwrap();
        assert_eq!(loaded.endpoint, "http://x");
        assert_eq!(loaded.notification_display_ms, 5000);
        assert_eq!(loaded.currency_symbol, "₹");
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let settings = Settings {
            log_level: "chatty".into(),
            ..Settings::default()
        };
        assert_eq!(settings.tracing_level(), tracing::Level::WARN);
    }
}
