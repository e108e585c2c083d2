//! Error types for apigen
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for apigen operations
pub type ApigenResult<T> = Result<T, ApigenError>;

/// Main error type for apigen operations
#[derive(Error, Debug)]
pub enum ApigenError {
    /// Specification directory does not exist
    #[error("specification directory not found: {path}")]
    NotFound { path: PathBuf },

    /// A filename cannot be turned into a task or package name
    #[error("cannot derive a name from {file}: {reason}")]
    Naming { file: PathBuf, reason: String },

    /// Two different documents derive the same task name
    #[error("duplicate task '{task}': both {first} and {second} derive the same name")]
    DuplicateTask {
        task: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A task name requested on the command line is not in the graph
    #[error("unknown task '{name}'")]
    UnknownTask { name: String },

    /// The external generator failed for one unit
    #[error("task '{task}' failed to generate from {spec}: {message}")]
    Generation {
        task: String,
        spec: PathBuf,
        message: String,
    },

    /// The compile command failed after generation
    #[error("compile step '{step}' failed: {message}")]
    Compile { step: String, message: String },

    /// Execution was interrupted before every unit completed
    #[error("build interrupted")]
    Interrupted,

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
