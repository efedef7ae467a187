//! Configuration for the Fenestra engine
//!
//! Supports JSON and TOML files, picked by extension. Every section has
//! defaults, so a partial file only overrides what it names.
//!
//! Sections:
//! - Recognition (plank thickness, mullion gap, minimum face area)
//! - Profile sizes (frame, bead, smallest profile)
//! - Edit guards (smallest accepted change)
//! - Hardware placement
//! - Color fallbacks
//! - Undo history depth

use fenestra_core::MomentoManager;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Hand-drawn recognition tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionSettings {
    /// Thickness of the plank built around every stroke
    pub plank_thickness: f64,
    /// Widest gap between two facing panes that still yields a mullion,
    /// in plank thicknesses
    pub mullion_gap_factor: f64,
    /// Faces with a smaller area are ignored
    pub min_face_area: f64,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            plank_thickness: 50.0,
            mullion_gap_factor: 1.5,
            min_face_area: 1.0,
        }
    }
}

/// Profile sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    pub frame_width: f64,
    pub bead_width: f64,
    /// Lower bound for anti-theft gap and handle width
    pub min_profile_size: f64,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            frame_width: 60.0,
            bead_width: 20.0,
            min_profile_size: 10.0,
        }
    }
}

/// Setter guards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditSettings {
    /// Changes smaller than this are ignored by gap and width setters
    pub min_delta: f64,
}

impl Default for EditSettings {
    fn default() -> Self {
        Self { min_delta: 0.5 }
    }
}

/// Hardware placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardwareSettings {
    /// Default position of hardware along its edge, 0..=1
    pub position_ratio: f64,
}

impl Default for HardwareSettings {
    fn default() -> Self {
        Self {
            position_ratio: 0.5,
        }
    }
}

/// Color derivation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    /// Multiplier applied to each channel of the bar color to get its shadow
    pub shadow_factor: f64,
    /// Shadow used when the bar is textured
    pub shadow_fallback: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            shadow_factor: 0.7,
            shadow_fallback: "#5A5A5A".to_string(),
        }
    }
}

/// Undo history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_depth: 100 }
    }
}

impl HistorySettings {
    /// Empty checkpoint history honoring `max_depth`.
    pub fn momento_manager(&self) -> MomentoManager {
        MomentoManager::with_depth(self.max_depth)
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub recognition: RecognitionSettings,
    pub profile: ProfileSettings,
    pub edit: EditSettings,
    pub hardware: HardwareSettings,
    pub color: ColorSettings,
    pub history: HistorySettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format_of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let r = &self.recognition;
        if r.plank_thickness <= 0.0 {
            return Err(out_of_range("recognition.plank_thickness", r.plank_thickness));
        }
        if r.mullion_gap_factor <= 0.0 {
            return Err(out_of_range(
                "recognition.mullion_gap_factor",
                r.mullion_gap_factor,
            ));
        }
        if r.min_face_area < 0.0 {
            return Err(out_of_range("recognition.min_face_area", r.min_face_area));
        }

        let p = &self.profile;
        if p.frame_width <= 0.0 {
            return Err(out_of_range("profile.frame_width", p.frame_width));
        }
        if p.bead_width < 0.0 {
            return Err(out_of_range("profile.bead_width", p.bead_width));
        }
        if p.min_profile_size < 0.0 {
            return Err(out_of_range("profile.min_profile_size", p.min_profile_size));
        }

        if self.edit.min_delta < 0.0 {
            return Err(out_of_range("edit.min_delta", self.edit.min_delta));
        }

        if !(0.0..=1.0).contains(&self.hardware.position_ratio) {
            return Err(out_of_range(
                "hardware.position_ratio",
                self.hardware.position_ratio,
            ));
        }

        if !(0.0..=1.0).contains(&self.color.shadow_factor) {
            return Err(out_of_range("color.shadow_factor", self.color.shadow_factor));
        }

        if self.history.max_depth == 0 {
            return Err(out_of_range("history.max_depth", self.history.max_depth));
        }

        Ok(())
    }
}

/// Platform config location: `<config dir>/fenestra/config.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("fenestra").join("config.toml"))
}
