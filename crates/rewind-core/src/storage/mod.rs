//! Durable storage for the problem list and application configuration.

mod config;
mod json_file;
mod memory;

pub use config::Config;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::PersistenceError;
use crate::problem::Problem;

/// Key-value durability boundary for the problem list.
///
/// The store synchronizes here after every mutation and loads once at
/// startup. Durability is best-effort: the in-memory store stays
/// authoritative when a save fails.
pub trait PersistenceBridge {
    /// Load the persisted problem list.
    ///
    /// Returns an empty list when no prior data exists or when the stored
    /// payload cannot be deserialized; both cases are non-fatal and logged.
    fn load(&self) -> Vec<Problem>;

    /// Overwrite the entire durable record.
    fn save(&self, problems: &[Problem]) -> Result<(), PersistenceError>;

    /// Delete the durable record.
    fn clear(&self) -> Result<(), PersistenceError>;
}

/// Returns `~/.config/algo-rewind[-dev]/` based on ALGO_REWIND_ENV.
///
/// ALGO_REWIND_DATA_DIR overrides the path entirely (used by tests and the
/// CLI harness). Set ALGO_REWIND_ENV=dev to use the development directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = if let Ok(custom) = std::env::var("ALGO_REWIND_DATA_DIR") {
        PathBuf::from(custom)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("ALGO_REWIND_ENV").unwrap_or_else(|_| "production".to_string());

        if env == "dev" {
            base_dir.join("algo-rewind-dev")
        } else {
            base_dir.join("algo-rewind")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
