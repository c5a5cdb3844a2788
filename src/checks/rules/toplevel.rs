//! Top-level file presence rules.
//!
//! `TOPLEVEL.CMAKE`, `TOPLEVEL.LICENSE` and `TOPLEVEL.README` require the
//! corresponding file at the repository root to exist and be non-empty.

use crate::checks::{Check, CheckContext, TargetFile};
use crate::error::Result;

/// Requires a top-level `CMakeLists.txt`.
pub struct ToplevelCmakeCheck;

impl Check for ToplevelCmakeCheck {
    fn name(&self) -> &str {
        "TOPLEVEL.CMAKE"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        Ok(TargetFile::new("CMakeLists.txt").base_check(ctx))
    }
}

/// Requires a top-level `LICENSE`.
pub struct ToplevelLicenseCheck;

impl Check for ToplevelLicenseCheck {
    fn name(&self) -> &str {
        "TOPLEVEL.LICENSE"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        Ok(TargetFile::new("LICENSE").base_check(ctx))
    }
}

/// Requires a top-level `README.md`.
pub struct ToplevelReadmeCheck;

impl Check for ToplevelReadmeCheck {
    fn name(&self) -> &str {
        "TOPLEVEL.README"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        Ok(TargetFile::new("README.md").base_check(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepoInfo;
    use crate::standard::builtin_catalog;
    use std::fs;
    use tempfile::TempDir;

    fn run(check: &dyn Check, files: &[(&str, &str)]) -> bool {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(temp.path().join(name), content).unwrap();
        }
        let repo = RepoInfo::new("exemplar", temp.path());
        let catalog = builtin_catalog().unwrap();
        let mut ctx = CheckContext::new(check.name(), &repo, &catalog);
        check.check(&mut ctx).unwrap()
    }

    #[test]
    fn cmake_passes_when_present() {
        assert!(run(
            &ToplevelCmakeCheck,
            &[("CMakeLists.txt", "cmake_minimum_required(VERSION 3.25)\n")]
        ));
    }

    #[test]
    fn cmake_fails_when_missing() {
        assert!(!run(&ToplevelCmakeCheck, &[]));
    }

    #[test]
    fn license_fails_when_empty() {
        assert!(!run(&ToplevelLicenseCheck, &[("LICENSE", "")]));
    }

    #[test]
    fn readme_passes_when_present() {
        assert!(run(&ToplevelReadmeCheck, &[("README.md", "# beman.exemplar\n")]));
    }

    #[test]
    fn toplevel_checks_cannot_fix() {
        let temp = TempDir::new().unwrap();
        let repo = RepoInfo::new("exemplar", temp.path());
        let catalog = builtin_catalog().unwrap();
        let mut ctx = CheckContext::new("TOPLEVEL.README", &repo, &catalog);

        assert!(!ToplevelReadmeCheck.fix(&mut ctx).unwrap());
    }
}
