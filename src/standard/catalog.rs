//! The validated rule catalog.
//!
//! A [`Catalog`] is the ordered list of every rule in the standard,
//! independent of which rules have an implementation. Names are validated
//! to be unique once, when the catalog is built.

use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;

use super::kind::CheckKind;
use crate::error::{Result, TidyError};

/// A single rule of the standard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    /// Dotted rule name, e.g. `README.TITLE`.
    pub name: String,
    /// Whether the rule is mandatory or advisory.
    #[serde(rename = "type")]
    pub kind: CheckKind,
    /// Rule text, used for display only.
    #[serde(default)]
    pub body: String,
}

impl CatalogEntry {
    /// Create a new catalog entry.
    pub fn new(name: impl Into<String>, kind: CheckKind, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            body: body.into(),
        }
    }
}

/// Ordered, duplicate-free collection of standard rules.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicated rule names.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::DuplicateCatalogEntries`] listing every name
    /// that appears more than once.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        let mut duplicates = BTreeSet::new();

        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.name.clone(), position).is_some() {
                duplicates.insert(entry.name.clone());
            }
        }

        if !duplicates.is_empty() {
            return Err(TidyError::DuplicateCatalogEntries {
                names: duplicates.into_iter().collect(),
            });
        }

        Ok(Self { entries, index })
    }

    /// Look up a rule by exact name.
    pub fn lookup(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Check if the catalog contains a rule.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate over the rules in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// All rule names, in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
