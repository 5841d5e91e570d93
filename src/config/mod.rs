//! Configuration file support for spritekeys.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/spritekeys/config.toml`. Settings include the keymap that
//! populates the shortcut registry and the tool palette layout.
//!
//! If no config file exists, the built-in keymap is used automatically.

pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use keybindings::{CommandBinding, EditorActionBinding, KeymapConfig, KeymapError, ToolBinding};
pub use types::ToolbarConfig;

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All sections have defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [[keymap.tools]]
/// tool = "pencil"
/// keys = ["B", "P"]
///
/// [toolbar]
/// hidden_tools = ["jumble"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Keyboard shortcuts
    #[serde(default)]
    pub keymap: KeymapConfig,

    /// Tool palette layout
    #[serde(default)]
    pub toolbar: ToolbarConfig,
}

impl Config {
    /// Drops keymap entries that cannot bind anything and deduplicates the
    /// hidden tool list. Problems are logged as warnings.
    fn validate(&mut self) {
        self.keymap.validate();

        let before = self.toolbar.hidden_tools.len();
        let mut seen = HashSet::new();
        self.toolbar
            .hidden_tools
            .retain(|tool| seen.insert(tool.clone()));
        if self.toolbar.hidden_tools.len() != before {
            log::warn!("Duplicate entries removed from toolbar.hidden_tools");
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/spritekeys/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("spritekeys");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using built-in keymap");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> Schema {
        schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [[keymap.tools]]
            tool = "pencil"
            keys = ["P"]

            [toolbar]
            hidden_tools = ["spray", "spray", "jumble"]
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.keymap.tools.len(), 1);
        assert_eq!(config.keymap.tools[0].keys, ["P"]);
        assert_eq!(config.toolbar.hidden_tools, ["spray", "jumble"]);
        assert_eq!(config.keymap.commands, KeymapConfig::default().commands);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let err = Config::load_from(&temp.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[keymap\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = Config::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_schema_names_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("keymap"));
        assert!(schema.contains("hidden_tools"));
    }
}
