//! beman-tidy - Check repositories against the Beman Standard.
//!
//! beman-tidy audits a C++ library repository against a catalog of named
//! rules, each a mandatory REQUIREMENT or an advisory RECOMMENDATION,
//! reports which pass, fail, are skipped or are not implemented, and can
//! fix some violations in place.
//!
//! # Modules
//!
//! - [`checks`] - The check contract, registry and built-in rules
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.beman-tidy.yml` project configuration
//! - [`error`] - Error types and result aliases
//! - [`pipeline`] - Check execution, outcome counting and coverage
//! - [`report`] - Summary and coverage rendering
//! - [`repository`] - Repository discovery
//! - [`standard`] - The rule catalog and its loader
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use beman_tidy::checks::CheckRegistry;
//! use beman_tidy::pipeline::{PipelineRunner, RunConfig};
//! use beman_tidy::repository::RepoInfo;
//! use beman_tidy::standard::builtin_catalog;
//! use beman_tidy::ui::MockUI;
//!
//! let catalog = builtin_catalog().unwrap();
//! let registry = CheckRegistry::with_builtins();
//! let runner = PipelineRunner::new(&catalog, &registry, RunConfig::default());
//!
//! // Nothing to check in an empty repository: every file rule fails.
//! let repo = RepoInfo::new("exemplar", "/nonexistent/exemplar");
//! let mut ui = MockUI::new();
//! let report = runner
//!     .run(&repo, &["TOPLEVEL.CMAKE".to_string()], &mut ui)
//!     .unwrap();
//! assert_eq!(report.failure_count(), 1);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod repository;
pub mod standard;
pub mod ui;

pub use error::{Result, TidyError};
