//! Command-line interface for beman-tidy.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
