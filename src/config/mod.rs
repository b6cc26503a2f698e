//! Configuration module for Teller
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::TellerPaths;
pub use settings::Settings;
