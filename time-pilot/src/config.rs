use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePilotConfig {
    /// Project id selected when the form opens, e.g. "PRJ-248".
    #[serde(default)]
    pub default_project: Option<String>,
    /// Capture mouse events (clicks on fields and outside the preset popover).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
    /// Log filter used when RUST_LOG is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_mouse() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TimePilotConfig {
    fn default() -> Self {
        Self {
            default_project: None,
            mouse: default_mouse(),
            log_filter: default_log_filter(),
        }
    }
}

impl TimePilotConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("time-pilot")
            .join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(dirs::data_local_dir()
            .context("Cannot determine local data directory")?
            .join("time-pilot")
            .join("time-pilot.log"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}
