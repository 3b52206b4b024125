//! Error types for poetry-uncap.
//!
//! All operations return `Result<T>` which aliases `Result<T, UncapError>`.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors from uncap operations.
#[derive(Debug, Error)]
pub enum UncapError {
    /// No manifest at the expected location.
    #[error("No pyproject.toml found at {0}")]
    ManifestNotFound(PathBuf),

    /// Manifest exists but declares no `[tool.poetry]` table.
    #[error("{0} does not appear to be using Poetry")]
    NotPoetryProject(PathBuf),

    /// Spawning the poetry binary failed.
    #[error("Failed to run 'poetry {command}': {source}")]
    PoetryCommand {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The poetry binary exited with a failure status.
    #[error("'poetry {command}' exited with {status}")]
    PoetryFailed { command: String, status: ExitStatus },

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parse or serialization error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml_edit::TomlError),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for poetry-uncap operations.
pub type Result<T> = std::result::Result<T, UncapError>;
