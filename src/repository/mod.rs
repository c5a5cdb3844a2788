//! Repository discovery.
//!
//! [`RepoInfo`] is the read-only context every check receives: the
//! repository name, its top-level directory, and the list of tracked files
//! with unstaged modifications.

pub mod git;

use std::path::{Path, PathBuf};

use crate::error::{Result, TidyError};

/// Read-only description of the audited repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    /// Repository name (the top-level directory name).
    pub name: String,
    /// Absolute path of the working tree root.
    pub top_level: PathBuf,
    /// Tracked files with unstaged changes, relative to `top_level`.
    pub unstaged_changes: Vec<PathBuf>,
}

impl RepoInfo {
    /// Create repository info with a clean working tree.
    pub fn new(name: impl Into<String>, top_level: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            top_level: top_level.into(),
            unstaged_changes: Vec::new(),
        }
    }

    /// Set the unstaged changes.
    pub fn with_unstaged_changes(mut self, changes: Vec<PathBuf>) -> Self {
        self.unstaged_changes = changes;
        self
    }

    /// Discover the git repository containing `path`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryNotFound` if `path` is not inside a git working
    /// tree, or `Other` if listing unstaged changes fails.
    pub fn discover(path: &Path) -> Result<Self> {
        let top_level = git::show_toplevel(path).map_err(|e| {
            tracing::debug!("git discovery failed: {}", e);
            TidyError::RepositoryNotFound {
                path: path.to_path_buf(),
            }
        })?;

        let name = top_level
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let unstaged_changes = git::unstaged_changes(&top_level)?;

        tracing::debug!(
            "Discovered repository '{}' at {} ({} unstaged change(s))",
            name,
            top_level.display(),
            unstaged_changes.len()
        );

        Ok(Self {
            name,
            top_level,
            unstaged_changes,
        })
    }

    /// Check if the working tree has no unstaged changes.
    pub fn is_clean(&self) -> bool {
        self.unstaged_changes.is_empty()
    }

    /// Resolve a path relative to the repository root.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.top_level.join(relative)
    }
}
