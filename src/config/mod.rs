//! Configuration management for navdeck.
//!
//! Handles persistence and loading of user preferences: the default data
//! file and layout settings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Data file used when `--data` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    /// Layout configuration
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Where this config was loaded from (not serialized)
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the user config directory, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                path: Some(path.to_path_buf()),
                ..Self::default()
            });
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.layout.validate();
        config.path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Save configuration to the path it was loaded from
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(()); // Skip saving if no path set (in-memory config)
        };

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get the path to the config file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;

        Ok(config_dir.join("navdeck").join("config.toml"))
    }
}

/// Layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Number of link cards per row (1-4)
    #[serde(default = "default_card_columns")]
    pub card_columns: u8,

    /// Whether the keybinding hint bar is shown at the bottom
    #[serde(default = "default_show_help_bar")]
    pub show_help_bar: bool,
}

/// Fewest card columns allowed
pub const MIN_CARD_COLUMNS: u8 = 1;

/// Most card columns allowed
pub const MAX_CARD_COLUMNS: u8 = 4;

fn default_card_columns() -> u8 {
    2
}

fn default_show_help_bar() -> bool {
    true
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_columns: default_card_columns(),
            show_help_bar: default_show_help_bar(),
        }
    }
}

impl LayoutConfig {
    /// Validate and clamp card columns to the valid range (1-4)
    pub fn validate(&mut self) {
        self.card_columns = self.card_columns.clamp(MIN_CARD_COLUMNS, MAX_CARD_COLUMNS);
    }

    /// Adjust card columns by `delta`, clamped. Returns whether it changed.
    pub fn adjust_card_columns(&mut self, delta: i8) -> bool {
        let before = self.card_columns;
        let next = (i16::from(before) + i16::from(delta))
            .clamp(i16::from(MIN_CARD_COLUMNS), i16::from(MAX_CARD_COLUMNS));
        self.card_columns = next as u8;
        self.card_columns != before
    }
}
