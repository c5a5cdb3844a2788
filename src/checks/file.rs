//! Helpers for checks that inspect a single repository file.

use std::fs;
use std::path::{Path, PathBuf};

use super::check::CheckContext;
use crate::error::Result;

/// A file at a fixed path relative to the repository root.
#[derive(Debug, Clone)]
pub struct TargetFile {
    relative: PathBuf,
}

impl TargetFile {
    /// Create a target for `relative` (e.g. `README.md`).
    pub fn new(relative: impl Into<PathBuf>) -> Self {
        Self {
            relative: relative.into(),
        }
    }

    /// The path relative to the repository root.
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// The absolute path inside the audited repository.
    pub fn path(&self, ctx: &CheckContext<'_>) -> PathBuf {
        ctx.repo().path(&self.relative)
    }

    /// Run [`CheckContext::base_check`], then require the file to exist and
    /// be non-empty.
    pub fn base_check(&self, ctx: &mut CheckContext<'_>) -> bool {
        if !ctx.base_check() {
            return false;
        }

        if self.relative.as_os_str().is_empty() {
            ctx.log("The path is not set.");
            return false;
        }

        let path = self.path(ctx);
        if !path.is_file() {
            ctx.log(format!("The file '{}' does not exist.", path.display()));
            return false;
        }

        match fs::read_to_string(&path) {
            Ok(content) if content.is_empty() => {
                ctx.log(format!("The file '{}' is empty.", path.display()));
                false
            }
            Ok(_) => true,
            Err(e) => {
                ctx.log(format!("The file '{}' can't be read: {}", path.display(), e));
                false
            }
        }
    }

    /// Read the whole file.
    pub fn read(&self, ctx: &CheckContext<'_>) -> Result<String> {
        Ok(fs::read_to_string(self.path(ctx))?)
    }

    /// Read the file as lines, without line terminators.
    pub fn read_lines(&self, ctx: &CheckContext<'_>) -> Result<Vec<String>> {
        Ok(self.read(ctx)?.lines().map(str::to_string).collect())
    }

    /// Replace the file content.
    pub fn write(&self, ctx: &CheckContext<'_>, content: &str) -> Result<()> {
        fs::write(self.path(ctx), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepoInfo;
    use crate::standard::Catalog;
    use tempfile::TempDir;

    fn setup(files: &[(&str, &str)]) -> (TempDir, RepoInfo) {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(temp.path().join(name), content).unwrap();
        }
        let repo = RepoInfo::new("exemplar", temp.path());
        (temp, repo)
    }

    #[test]
    fn base_check_passes_for_non_empty_file() {
        let (_temp, repo) = setup(&[("README.md", "# hello\n")]);
        let catalog = Catalog::default();
        let mut ctx = CheckContext::new("TOPLEVEL.README", &repo, &catalog);

        assert!(TargetFile::new("README.md").base_check(&mut ctx));
    }

    #[test]
    fn base_check_fails_for_missing_file() {
        let (_temp, repo) = setup(&[]);
        let catalog = Catalog::default();
        let mut ctx = CheckContext::new("TOPLEVEL.README", &repo, &catalog);

        assert!(!TargetFile::new("README.md").base_check(&mut ctx));
        assert!(ctx.take_logs()[0].contains("does not exist"));
    }

    #[test]
    fn base_check_fails_for_empty_file() {
        let (_temp, repo) = setup(&[("LICENSE", "")]);
        let catalog = Catalog::default();
        let mut ctx = CheckContext::new("TOPLEVEL.LICENSE", &repo, &catalog);

        assert!(!TargetFile::new("LICENSE").base_check(&mut ctx));
        assert!(ctx.take_logs()[0].contains("is empty"));
    }

    #[test]
    fn base_check_fails_for_directory() {
        let (temp, repo) = setup(&[]);
        fs::create_dir(temp.path().join("LICENSE")).unwrap();
        let catalog = Catalog::default();
        let mut ctx = CheckContext::new("TOPLEVEL.LICENSE", &repo, &catalog);

        assert!(!TargetFile::new("LICENSE").base_check(&mut ctx));
    }

    #[test]
    fn reads_and_writes_content() {
        let (_temp, repo) = setup(&[("README.md", "line one\nline two\n")]);
        let catalog = Catalog::default();
        let ctx = CheckContext::new("README.TITLE", &repo, &catalog);
        let file = TargetFile::new("README.md");

        assert_eq!(file.read_lines(&ctx).unwrap(), vec!["line one", "line two"]);

        file.write(&ctx, "replaced\n").unwrap();
        assert_eq!(file.read(&ctx).unwrap(), "replaced\n");
    }
}
