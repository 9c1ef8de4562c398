//! Core error types for rewind-core.
//!
//! The hierarchy mirrors the failure taxonomy of the engine: user input
//! validation, enumerated-value violations, an unavailable scheduling
//! module, malformed import payloads and durable-storage failures.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rewind-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid user-supplied field
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Proficiency level outside the recognized set
    #[error("Invalid level: {value}")]
    InvalidLevel { value: String },

    /// Review outcome outside the recognized set
    #[error("Invalid review outcome: {value}")]
    InvalidOutcome { value: String },

    /// Scheduling module uncallable; creation and review transitions have
    /// no local fallback
    #[error("Scheduling module unavailable")]
    ModuleUnavailable,

    /// Malformed import payload; the store is left untouched
    #[error("Import failed: {0}")]
    ImportParse(#[source] serde_json::Error),

    /// Durable read/write failure
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Validation errors for user-supplied fields.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Problem name empty after trimming
    #[error("problem name must not be empty")]
    EmptyName,

    /// Referenced problem id not present in the store
    #[error("unknown problem id: {0}")]
    UnknownProblem(i64),
}

/// Durable-storage errors.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to read the durable record
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the durable record
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to delete the durable record
    #[error("failed to delete {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the problem list
    #[error("failed to serialize problems: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
