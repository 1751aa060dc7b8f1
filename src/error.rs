//! Error types for new-module.
//!
//! All operations return `Result<T>` which aliases `Result<T, ModuleError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from module registration.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// Flags were supplied in a combination that cannot be acted on.
    #[error("{0}")]
    Usage(String),

    /// Excluded platform is not one of the supported platforms.
    #[error("Unknown platform '{0}' (expected one of: ios, watchos, osx, tvos)")]
    UnknownPlatform(String),

    /// Excluded platform listed more than once.
    #[error("Platform '{0}' is excluded more than once")]
    DuplicatePlatform(String),

    /// Version is not a `major.minor.patch` triple.
    #[error("Invalid version '{0}': expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),

    /// File lacks the structure an edit depends on.
    #[error("Malformed {0}: {1}")]
    MalformedFile(PathBuf, String),

    /// Rollback failed after commit error.
    #[error("Rollback failed: {0}")]
    RollbackFailed(String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for new-module operations.
pub type Result<T> = std::result::Result<T, ModuleError>;
