//! Beman Standard checks.
//!
//! The check system consists of:
//!
//! - **Contract** - The lifecycle every check implements ([`Check`] trait)
//! - **Context** - Per-run identity, kind, repository and log ([`CheckContext`])
//! - **Registry** - Rule name to implementation mapping ([`CheckRegistry`])
//! - **Guard** - The internal fix-in-place precondition
//!   ([`DisallowFixInplaceAndUnstagedChangesCheck`])
//!
//! # Example
//!
//! ```
//! use beman_tidy::checks::CheckRegistry;
//!
//! let registry = CheckRegistry::with_builtins();
//! assert!(registry.contains("README.TITLE"));
//! assert!(registry.create("CPP.NAMESPACE").is_none());
//! ```

pub mod check;
pub mod file;
pub mod guard;
pub mod registry;
pub mod rules;

pub use check::{Check, CheckContext, SkipDecision, INTERNAL_CHECK_BODY};
pub use file::TargetFile;
pub use guard::{DisallowFixInplaceAndUnstagedChangesCheck, GUARD_NAME};
pub use registry::{CheckConstructor, CheckRegistry};
