// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[marquee]` - Strip speed, direction, spacing and hover behavior
//! - `[drawer]` - Panel width and navigation settle delay
//! - `[content]` - Location of the image assets
//!
//! Every field is optional. Missing or out-of-range values fall back to the
//! constants of [`defaults`] when the runtime settings are derived.
//!
//! # Path Resolution
//!
//! 1. `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. `PIZZA_MANIA_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::drawer::DrawerSettings;
use crate::error::{Error, Result};
use crate::marquee::{Direction, MarqueeSettings};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery strip settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarqueeConfig {
    /// Pixels per second.
    #[serde(default = "default_marquee_speed", skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_height: Option<f32>,

    /// Playback rate while hovered (0.1 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_time_scale: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_ramp_secs: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure_retry_delay_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_measure_attempts: Option<u32>,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed: default_marquee_speed(),
            direction: Some(Direction::default()),
            gap: None,
            strip_height: None,
            hover_time_scale: None,
            hover_ramp_secs: None,
            measure_retry_delay_ms: None,
            max_measure_attempts: None,
        }
    }
}

/// Navigation drawer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DrawerConfig {
    /// Delay between choosing a destination and the drawer closing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_delay_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_width: Option<f32>,
}

/// Content location settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContentConfig {
    /// Directory holding the gallery and menu images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub marquee: MarqueeConfig,

    #[serde(default)]
    pub drawer: DrawerConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

impl Config {
    /// Runtime marquee tuning, with every value brought back in range.
    #[must_use]
    pub fn marquee_settings(&self) -> MarqueeSettings {
        let section = &self.marquee;
        let base = MarqueeSettings::default();
        MarqueeSettings {
            speed: section
                .speed
                .filter(|v| v.is_finite())
                .map_or(base.speed, |v| v.clamp(MIN_MARQUEE_SPEED, MAX_MARQUEE_SPEED)),
            direction: section.direction.unwrap_or(base.direction),
            gap: section
                .gap
                .filter(|v| v.is_finite())
                .map_or(base.gap, |v| v.clamp(0.0, MAX_MARQUEE_GAP)),
            strip_height: section
                .strip_height
                .filter(|v| v.is_finite())
                .map_or(base.strip_height, |v| {
                    v.clamp(MIN_MARQUEE_HEIGHT, MAX_MARQUEE_HEIGHT)
                }),
            hover_time_scale: section
                .hover_time_scale
                .filter(|v| v.is_finite())
                .map_or(base.hover_time_scale, |v| {
                    v.clamp(MIN_HOVER_TIME_SCALE, MAX_HOVER_TIME_SCALE)
                }),
            hover_ramp_secs: section
                .hover_ramp_secs
                .filter(|v| v.is_finite())
                .map_or(base.hover_ramp_secs, |v| v.clamp(0.0, MAX_HOVER_RAMP_SECS)),
            measure_retry_delay: section
                .measure_retry_delay_ms
                .filter(|ms| *ms > 0)
                .map_or(base.measure_retry_delay, Duration::from_millis),
            max_measure_attempts: section
                .max_measure_attempts
                .map_or(base.max_measure_attempts, |n| n.clamp(1, MAX_MEASURE_ATTEMPTS)),
            image_retry_delay: base.image_retry_delay,
        }
    }

    /// Runtime drawer tuning.
    #[must_use]
    pub fn drawer_settings(&self) -> DrawerSettings {
        let base = DrawerSettings::default();
        DrawerSettings {
            settle_delay: self
                .drawer
                .settle_delay_ms
                .map_or(base.settle_delay, |ms| {
                    Duration::from_millis(ms.min(MAX_SETTLE_DELAY_MS))
                }),
            panel_width: self
                .drawer
                .panel_width
                .filter(|v| v.is_finite())
                .map_or(base.panel_width, |v| v.clamp(MIN_DRAWER_WIDTH, MAX_DRAWER_WIDTH)),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_marquee_speed() -> Option<f32> {
    Some(DEFAULT_MARQUEE_SPEED)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns the config and an optional i18n key describing why the defaults
/// were used instead of the file.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "settings loaded");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings, using defaults");
            (Config::default(), Some("warning-config-load".to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

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

// =============================================================================
// Tests
// =============================================================================
