//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self { exit_code }
    }

    /// Create a result from a failed-check count.
    ///
    /// Counts above 255 are clamped so they never wrap to success.
    pub fn from_failures(failures: usize) -> Self {
        if failures == 0 {
            Self::success()
        } else {
            Self::failure(u8::try_from(failures).unwrap_or(u8::MAX))
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
    use_color: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher resolving relative paths against `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self {
            working_dir,
            use_color: false,
        }
    }

    /// Enable or disable colored summaries.
    pub fn with_colors(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Without a subcommand, checks the working directory.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&self.working_dir, args.clone())
                    .with_colors(self.use_color);
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(&self.working_dir, args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::check::CheckCommand::new(&self.working_dir, CheckArgs::default())
                    .with_colors(self.use_color);
                cmd.execute(ui)
            }
        }
    }
}
