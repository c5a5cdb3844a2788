//! Check command implementation.
//!
//! The `beman-tidy check` command audits a repository against the standard
//! and exits with the number of failed checks.

use std::path::{Path, PathBuf};

use crate::checks::CheckRegistry;
use crate::cli::args::CheckArgs;
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::pipeline::{PipelineRunner, RunConfig};
use crate::report::Reporter;
use crate::repository::RepoInfo;
use crate::standard::resolve_catalog;
use crate::ui::{OutputMode, TidyTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    working_dir: PathBuf,
    args: CheckArgs,
    use_color: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(working_dir: &Path, args: CheckArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
            use_color: false,
        }
    }

    /// Enable or disable colored summaries.
    pub fn with_colors(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    fn repo_path(&self) -> PathBuf {
        match &self.args.repo_path {
            Some(path) => self.working_dir.join(path),
            None => self.working_dir.clone(),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let repo = RepoInfo::discover(&self.repo_path())?;
        let project = ProjectConfig::load(&repo.top_level)?;

        let standard = self
            .args
            .standard
            .as_ref()
            .map(|path| self.working_dir.join(path))
            .or_else(|| project.standard.clone());
        let catalog = resolve_catalog(standard.as_deref())?;

        let config = RunConfig {
            verbose: ui.output_mode() == OutputMode::Verbose,
            fix_inplace: self.args.fix_inplace,
            require_all: self.args.require_all || project.require_all.unwrap_or(false),
        };

        let requested = if self.args.checks.is_empty() {
            catalog.names()
        } else {
            self.args.checks.clone()
        };
        let requested = project.filter_ignored(requested);

        tracing::debug!(
            "Checking {} ({} rules requested, {:?})",
            repo.top_level.display(),
            requested.len(),
            config
        );

        let registry = CheckRegistry::with_builtins();
        let runner = PipelineRunner::new(&catalog, &registry, config);
        let report = runner.run(&repo, &requested, ui)?;

        let reporter = Reporter::new(TidyTheme::with_colors(self.use_color));
        let failures = reporter.render(&report, ui)?;

        Ok(CommandResult::from_failures(failures))
    }
}
