//! Standard catalog loading.
//!
//! Catalogs are YAML lists of `{ name, type, body }` entries. The default
//! Beman Standard is embedded in the binary.

use std::fs;
use std::path::Path;

use super::catalog::{Catalog, CatalogEntry};
use crate::error::{Result, TidyError};

/// The Beman Standard shipped with beman-tidy.
pub const BUILTIN_STANDARD: &str = include_str!("beman_standard.yml");

/// Parse catalog YAML. `origin` is only used for error messages.
pub fn parse_catalog(content: &str, origin: &Path) -> Result<Catalog> {
    let entries: Vec<CatalogEntry> =
        serde_yaml::from_str(content).map_err(|e| TidyError::CatalogParseError {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

    let catalog = Catalog::new(entries)?;
    tracing::debug!(
        "Loaded {} standard rules from {}",
        catalog.len(),
        origin.display()
    );
    Ok(catalog)
}

/// Load a catalog from a YAML file.
///
/// # Errors
///
/// Returns `Io` if the file can't be read, `CatalogParseError` if the
/// YAML is invalid, or `DuplicateCatalogEntries` for repeated names.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content, path)
}

/// The embedded Beman Standard.
pub fn builtin_catalog() -> Result<Catalog> {
    parse_catalog(BUILTIN_STANDARD, Path::new("<builtin>"))
}

/// Load the catalog at `path`, or the embedded standard when there is none.
pub fn resolve_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => load_catalog(path),
        None => builtin_catalog(),
    }
}
