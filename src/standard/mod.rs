//! The Beman Standard rule catalog.
//!
//! - [`CheckKind`] - REQUIREMENT or RECOMMENDATION
//! - [`Catalog`] - Validated, ordered list of [`CatalogEntry`] values
//! - [`loader`] - YAML loading and the embedded default standard
//!
//! # Example
//!
//! ```
//! use beman_tidy::standard::{builtin_catalog, CheckKind};
//!
//! let catalog = builtin_catalog().unwrap();
//! let entry = catalog.lookup("TOPLEVEL.CMAKE").unwrap();
//! assert_eq!(entry.kind, CheckKind::Requirement);
//! ```

pub mod catalog;
pub mod kind;
pub mod loader;

pub use catalog::{Catalog, CatalogEntry};
pub use kind::CheckKind;
pub use loader::{
    builtin_catalog, load_catalog, parse_catalog, resolve_catalog, BUILTIN_STANDARD,
};
