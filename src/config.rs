//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Reset a dependent group's selections when its scenario is answered "No"
    pub clear_hidden_selections: Option<bool>,
    /// Show the form-state inspector on startup
    pub show_devtools: Option<bool>,
}

impl FormConfig {
    /// Config file path in the platform config dir
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "phone-form", "phone-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn clear_hidden_selections(&self) -> bool {
        self.clear_hidden_selections.unwrap_or(false)
    }

    pub fn show_devtools(&self) -> bool {
        self.show_devtools.unwrap_or(false)
    }
}
