// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter of the `_with_override()` functions
//! 2. **CLI arguments** (`--config-dir`, `--assets-dir`), set via [`init_cli_overrides`]
//! 3. **Environment variables** (`PIZZA_MANIA_CONFIG_DIR`, `PIZZA_MANIA_ASSETS_DIR`)
//! 4. **Platform default**: `dirs` config directory, `assets/` for images
//!
//! The assets directory additionally honors `[content] assets_dir` from the
//! settings file, between the environment and the default.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "PizzaMania";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PIZZA_MANIA_CONFIG_DIR";

/// Environment variable to override the assets directory.
pub const ENV_ASSETS_DIR: &str = "PIZZA_MANIA_ASSETS_DIR";

/// Assets location when nothing else is configured.
const DEFAULT_ASSETS_DIR: &str = "assets";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_ASSETS_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the directories given on the command line. Only the first call
/// has an effect.
pub fn init_cli_overrides(config_dir: Option<String>, assets_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
        || CLI_ASSETS_DIR.set(assets_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("CLI directory overrides were already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_assets_dir() -> Option<PathBuf> {
    CLI_ASSETS_DIR.get().and_then(Clone::clone)
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the directory holding `settings.toml`.
///
/// Linux: `~/.config/PizzaMania/`, macOS: `~/Library/Application Support/PizzaMania/`,
/// Windows: `C:\Users\<User>\AppData\Roaming\PizzaMania\`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }
    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory image paths of the content are relative to.
///
/// `configured` is the `[content] assets_dir` value of the settings file.
pub fn resolve_assets_dir(configured: Option<PathBuf>) -> PathBuf {
    get_cli_assets_dir()
        .or_else(|| env_dir(ENV_ASSETS_DIR))
        .or(configured)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}
