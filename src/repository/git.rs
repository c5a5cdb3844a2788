//! Thin wrapper around the `git` binary.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run `git -C <dir> <args>` and return its trimmed stdout.
pub fn git_output(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").arg("-C").arg(dir).args(args).output()?;

    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Absolute path of the working tree containing `dir`.
pub fn show_toplevel(dir: &Path) -> Result<PathBuf> {
    git_output(dir, &["rev-parse", "--show-toplevel"]).map(PathBuf::from)
}

/// Tracked files modified in the working tree but not staged.
pub fn unstaged_changes(top_level: &Path) -> Result<Vec<PathBuf>> {
    let stdout = git_output(top_level, &["diff", "--name-only"])?;
    Ok(stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Check if the `git` binary can be executed.
pub fn is_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
