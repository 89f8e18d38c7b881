//! Error types for wownero-rename.
//!
//! All operations return `Result<T>` which aliases `Result<T, RenameError>`.

use thiserror::Error;

/// Errors from rename operations.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Invalid package name produced or supplied by the configuration.
    #[error("Invalid package name '{0}': {1}")]
    InvalidName(String, String),

    /// Configuration file has the wrong shape or inconsistent values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// File system operation failed.
    ///
    /// Fatal: manifests written before the failure stay written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parse error in the configuration file.
    #[error("TOML error: {0}")]
    Toml(#[from] toml_edit::TomlError),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for wownero-rename operations.
pub type Result<T> = std::result::Result<T, RenameError>;
