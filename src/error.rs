//! Error types for beman-tidy operations.
//!
//! This module defines [`TidyError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Catalog and registry integrity problems fail fast with a dedicated variant
//! - A violated rule is not an error; it is recorded as a FAILED check
//! - [`TidyError::UnstagedChanges`] is the abort signal raised by the
//!   fix-in-place guard and must reach the top level untouched
//! - Use `anyhow::Error` (via `TidyError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for beman-tidy operations.
#[derive(Debug, Error)]
pub enum TidyError {
    /// The standard catalog lists the same rule name more than once.
    #[error("Duplicate entries in the standard catalog: {}", names.join(", "))]
    DuplicateCatalogEntries { names: Vec<String> },

    /// A rule kind other than REQUIREMENT or RECOMMENDATION.
    #[error("Invalid check kind '{value}' (expected REQUIREMENT or RECOMMENDATION)")]
    InvalidKind { value: String },

    /// Failed to parse a standard catalog file.
    #[error("Failed to parse standard at {path}: {message}")]
    CatalogParseError { path: PathBuf, message: String },

    /// Failed to parse the project configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Requirement coverage has no denominator.
    #[error("No implemented REQUIREMENT checks: requirement coverage is undefined")]
    NoImplementedRequirements,

    /// Fix-in-place was requested on a dirty working tree.
    #[error(
        "Cannot fix in place with {} unstaged change(s); commit or stash them first",
        paths.len()
    )]
    UnstagedChanges { paths: Vec<PathBuf> },

    /// The given path is not inside a git repository.
    #[error("Not a git repository: {path}")]
    RepositoryNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TidyError {
    /// Process exit code for this error.
    ///
    /// Invalid standard or config files exit with 2, like usage errors.
    /// Everything else exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            TidyError::DuplicateCatalogEntries { .. }
            | TidyError::InvalidKind { .. }
            | TidyError::CatalogParseError { .. }
            | TidyError::ConfigParseError { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for beman-tidy operations.
pub type Result<T> = std::result::Result<T, TidyError>;
