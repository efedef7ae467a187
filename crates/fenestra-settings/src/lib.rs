//! Fenestra Settings Crate
//!
//! Engine configuration: recognition tolerances, profile sizes, edit guards,
//! hardware placement defaults, color fallbacks and history depth.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, ColorSettings, Config, EditSettings, HardwareSettings,
    HistorySettings, ProfileSettings, RecognitionSettings,
};
pub use error::{ConfigError, Result, SettingsError};
