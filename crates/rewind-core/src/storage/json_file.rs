//! JSON-file persistence bridge.
//!
//! The durable record is a single JSON array of problems, the same payload
//! shape the import/export operations use.

use std::path::PathBuf;

use log::warn;

use super::{data_dir, PersistenceBridge};
use crate::error::PersistenceError;
use crate::problem::Problem;

const PROBLEMS_FILE: &str = "problems.json";

/// File-backed problem storage.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at the default data directory.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join(PROBLEMS_FILE);
        Ok(Self { path })
    }

    /// Open the store at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PersistenceBridge for JsonFileStore {
    fn load(&self) -> Vec<Problem> {
        if !self.path.exists() {
            return Vec::new();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("failed to read {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(problems) => problems,
            Err(e) => {
                warn!(
                    "discarding unreadable problem data at {}: {e}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    fn save(&self, problems: &[Problem]) -> Result<(), PersistenceError> {
        let content = serde_json::to_string(problems)?;
        std::fs::write(&self.path, content).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        if !self.path.exists() {
            return Ok(());
        }
        std::fs::remove_file(&self.path).map_err(|source| PersistenceError::Delete {
            path: self.path.clone(),
            source,
        })
    }
}
