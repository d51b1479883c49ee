// SPDX-License-Identifier: MPL-2.0
//! This module handles persistence of the drag preferences, loading and
//! saving them to a `settings.toml` file.
//!
//! The engine itself only recognizes one option: whether dragging is
//! enabled. Hosts that want the preference to survive restarts can load it
//! here and feed it into [`crate::binding::Event::SetEnabled`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_drag_panel::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.draggable = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedDragPanel";

/// Default value for the draggable preference.
pub const DEFAULT_DRAGGABLE: bool = true;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Whether panel dragging is enabled.
    #[serde(default)]
    pub draggable: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            draggable: Some(DEFAULT_DRAGGABLE),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
