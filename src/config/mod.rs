//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use huddle_client::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.toast_duration_ms = Some(5_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::notifications::Severity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Huddle";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub toast_duration_ms: Option<u64>,
    #[serde(default)]
    pub toast_severity: Option<Severity>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Some(defaults::DEFAULT_API_BASE_URL.to_string()),
            toast_duration_ms: Some(defaults::DEFAULT_TOAST_DURATION_MS),
            toast_severity: Some(Severity::Info),
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
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
