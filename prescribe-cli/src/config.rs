//! Configuration handling for the prescribe CLI
//!
//! Supports loading configuration from prescribe.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use prescribe_core::CostConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "prescribe.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub costs: CostConfig,

    #[serde(default)]
    pub samples: SampleConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Inputs used when the user just presses enter at a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleConfig {
    #[serde(default = "default_original")]
    pub original: String,

    #[serde(default = "default_target")]
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Underline the element each step touched
    #[serde(default = "default_true")]
    pub highlight: bool,

    /// Print distance and operation counts under the table
    #[serde(default = "default_true")]
    pub summary: bool,
}

fn default_original() -> String { "electrical engineering".to_string() }
fn default_target() -> String { "computer science".to_string() }
fn default_true() -> bool { true }

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            original: default_original(),
            target: default_target(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            highlight: true,
            summary: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            log::info!("Loading configuration from: {}", path.display());
            return Self::load_from_file(path);
        }

        for candidate in Self::search_paths() {
            if candidate.exists() {
                log::info!("Loading configuration from: {}", candidate.display());
                return Self::load_from_file(&candidate);
            }
        }

        log::info!("Using default configuration");
        Ok(Self::default())
    }

    /// `./prescribe.toml`, then the per-user config directory.
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("prescribe").join(CONFIG_FILE_NAME));
        }
        paths
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        config
            .costs
            .validate()
            .with_context(|| format!("Invalid costs in configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
