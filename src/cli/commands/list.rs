//! List command implementation.
//!
//! The `beman-tidy list` command prints every rule of the standard with
//! its kind and whether beman-tidy implements it.

use std::path::{Path, PathBuf};

use crate::checks::CheckRegistry;
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::standard::{resolve_catalog, Catalog};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    working_dir: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(working_dir: &Path, args: ListArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    /// One `[<KIND>][<name>] <implemented|not implemented>` line per rule.
    pub fn lines(catalog: &Catalog, registry: &CheckRegistry) -> Vec<String> {
        catalog
            .iter()
            .map(|entry| {
                let status = if registry.contains(&entry.name) {
                    "implemented"
                } else {
                    "not implemented"
                };
                format!("[{}][{}] {}", entry.kind, entry.name, status)
            })
            .collect()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let standard = self
            .args
            .standard
            .as_ref()
            .map(|path| self.working_dir.join(path));
        let catalog = resolve_catalog(standard.as_deref())?;
        let registry = CheckRegistry::with_builtins();

        for line in Self::lines(&catalog, &registry) {
            ui.message(&line);
        }

        Ok(CommandResult::success())
    }
}
