//! Optional per-repository configuration.
//!
//! A repository may carry a `.beman-tidy.yml` at its top level:
//!
//! ```yaml
//! require_all: false
//! standard: docs/beman_standard.yml
//! ignore:
//!   - REPOSITORY.NAME
//! ```

pub mod project;

pub use project::{ProjectConfig, CONFIG_FILE_NAME};
