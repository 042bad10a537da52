// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[crop]` - Crop dialog tuning (zoom bounds and steps, frame size, export quality)
//!
//! Every `[crop]` key is optional. Missing keys fall back to [`defaults`], and
//! out-of-range values are clamped when the section is resolved into
//! [`CropSettings`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag (see [`crate::app::paths`])
//! 3. Set `ICED_CROP_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_crop::config;
//!
//! let (mut config, _warning) = config::load();
//! config.crop.jpeg_quality = Some(85);
//! config::save(&config).expect("Failed to save config");
//!
//! let settings = config.crop.resolve();
//! assert_eq!(settings.jpeg_quality, 85);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::crop::{CropSettings, FrameLimits, ScaleLimits};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Crop dialog tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropConfig {
    /// Multiplier over the minimal covering scale applied on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_margin: Option<f32>,

    /// Lower zoom bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_scale: Option<f32>,

    /// Upper zoom bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_scale: Option<f32>,

    /// Scale increment for the zoom buttons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,

    /// Scale increment for one wheel tick.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheel_step: Option<f32>,

    /// Free margin around the crop frame, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_inset: Option<f32>,

    /// Maximum crop frame width on screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_frame_width: Option<f32>,

    /// Maximum crop frame height on screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_frame_height: Option<f32>,

    /// Output resolution multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_upscale: Option<f32>,

    /// JPEG quality (1-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jpeg_quality: Option<u8>,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            coverage_margin: Some(DEFAULT_COVERAGE_MARGIN),
            min_scale: Some(DEFAULT_MIN_SCALE),
            max_scale: Some(DEFAULT_MAX_SCALE),
            zoom_step: Some(DEFAULT_ZOOM_STEP),
            wheel_step: Some(DEFAULT_WHEEL_STEP),
            frame_inset: Some(DEFAULT_FRAME_INSET),
            max_frame_width: Some(DEFAULT_MAX_FRAME_WIDTH),
            max_frame_height: Some(DEFAULT_MAX_FRAME_HEIGHT),
            export_upscale: Some(DEFAULT_EXPORT_UPSCALE),
            jpeg_quality: Some(DEFAULT_JPEG_QUALITY),
        }
    }
}

impl CropConfig {
    /// Resolves the optional keys into validated crop settings.
    #[must_use]
    pub fn resolve(&self) -> CropSettings {
        let min_scale = clamp_or(self.min_scale, DEFAULT_MIN_SCALE, SCALE_FLOOR, SCALE_CEILING);
        let max_scale = clamp_or(self.max_scale, DEFAULT_MAX_SCALE, SCALE_FLOOR, SCALE_CEILING)
            .max(min_scale);

        CropSettings {
            coverage_margin: clamp_or(
                self.coverage_margin,
                DEFAULT_COVERAGE_MARGIN,
                MIN_COVERAGE_MARGIN,
                MAX_COVERAGE_MARGIN,
            ),
            scale_limits: ScaleLimits::new(min_scale, max_scale),
            zoom_step: clamp_or(self.zoom_step, DEFAULT_ZOOM_STEP, MIN_STEP, MAX_STEP),
            wheel_step: clamp_or(self.wheel_step, DEFAULT_WHEEL_STEP, MIN_STEP, MAX_STEP),
            frame_limits: FrameLimits {
                inset: clamp_or(self.frame_inset, DEFAULT_FRAME_INSET, 0.0, MAX_FRAME_INSET),
                max_width: clamp_or(
                    self.max_frame_width,
                    DEFAULT_MAX_FRAME_WIDTH,
                    MIN_FRAME_SIDE,
                    MAX_FRAME_SIDE,
                ),
                max_height: clamp_or(
                    self.max_frame_height,
                    DEFAULT_MAX_FRAME_HEIGHT,
                    MIN_FRAME_SIDE,
                    MAX_FRAME_SIDE,
                ),
            },
            export_upscale: clamp_or(
                self.export_upscale,
                DEFAULT_EXPORT_UPSCALE,
                MIN_EXPORT_UPSCALE,
                MAX_EXPORT_UPSCALE,
            ),
            jpeg_quality: self
                .jpeg_quality
                .unwrap_or(DEFAULT_JPEG_QUALITY)
                .clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY),
        }
    }
}

/// Falls back to `default` for missing or non-finite values, then clamps.
fn clamp_or(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    value
        .filter(|v| v.is_finite())
        .unwrap_or(default)
        .clamp(min, max)
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Crop dialog tuning.
    #[serde(default)]
    pub crop: CropConfig,
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
