//! TOML-based application configuration.
//!
//! Stores presentation-layer preferences: the default sort order for the
//! problem list and the default export filename. Configuration is stored
//! at `~/.config/algo-rewind/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::views::SortKey;

fn default_sort() -> SortKey {
    SortKey::NextReview
}

fn default_export_filename() -> String {
    "algo-rewind.json".to_string()
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sort key applied to the problem list when none is given.
    #[serde(default = "default_sort")]
    pub default_sort: SortKey,
    /// Filename used by export when no path is given.
    #[serde(default = "default_export_filename")]
    pub export_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            export_filename: default_export_filename(),
        }
    }
}

impl Config {
    /// Config file path inside the data directory.
    pub fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }
}
