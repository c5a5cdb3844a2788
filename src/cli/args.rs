//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// beman-tidy - Check a repository against the Beman Standard.
#[derive(Debug, Parser)]
#[command(name = "beman-tidy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show per-check progress and check logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a repository (default if no command specified)
    Check(CheckArgs),

    /// List the rules of the standard and whether they are implemented
    List(ListArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Path to the repository to check (defaults to the current directory)
    pub repo_path: Option<PathBuf>,

    /// Try to fix failed checks in place
    #[arg(long)]
    pub fix_inplace: bool,

    /// Treat every RECOMMENDATION as a REQUIREMENT
    #[arg(long)]
    pub require_all: bool,

    /// Run only the specified checks (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub checks: Vec<String>,

    /// Path to a custom standard YAML file
    #[arg(long, value_name = "PATH")]
    pub standard: Option<PathBuf>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Path to a custom standard YAML file
    #[arg(long, value_name = "PATH")]
    pub standard: Option<PathBuf>,
}
