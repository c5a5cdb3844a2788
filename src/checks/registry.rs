//! Check registry.
//!
//! The [`CheckRegistry`] maps rule names to the constructors of the checks
//! that implement them. Not every rule in the catalog has an entry.

use std::collections::HashMap;

use super::check::Check;
use super::rules::{
    DirectoryInterfaceHeadersCheck, FileLicenseIdCheck, LicenseApacheLlvmCheck,
    ReadmeBadgesCheck, ReadmeTitleCheck, RepositoryNameCheck, ToplevelCmakeCheck,
    ToplevelLicenseCheck, ToplevelReadmeCheck,
};

/// Creates a fresh check instance for one run.
pub type CheckConstructor = fn() -> Box<dyn Check>;

/// Registry of implemented checks, keyed by rule name.
pub struct CheckRegistry {
    constructors: HashMap<String, CheckConstructor>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Create a registry with all built-in checks.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(|| Box::new(ToplevelCmakeCheck));
        registry.register(|| Box::new(ToplevelLicenseCheck));
        registry.register(|| Box::new(ToplevelReadmeCheck));
        registry.register(|| Box::new(ReadmeTitleCheck));
        registry.register(|| Box::new(ReadmeBadgesCheck));
        registry.register(|| Box::new(LicenseApacheLlvmCheck));
        registry.register(|| Box::new(RepositoryNameCheck));
        registry.register(|| Box::new(DirectoryInterfaceHeadersCheck));
        registry.register(|| Box::new(FileLicenseIdCheck));
        registry
    }

    /// Register a check under the name it reports.
    pub fn register(&mut self, constructor: CheckConstructor) {
        let name = constructor().name().to_string();
        self.constructors.insert(name, constructor);
    }

    /// Instantiate the check registered for `name`.
    pub fn create(&self, name: &str) -> Option<Box<dyn Check>> {
        self.constructors.get(name).map(|constructor| constructor())
    }

    /// Check if `name` has an implementation.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckContext;
    use crate::error::Result;
    use crate::standard::builtin_catalog;

    struct MockCheck;

    impl Check for MockCheck {
        fn name(&self) -> &str {
            "MOCK.RULE"
        }

        fn check(&self, _ctx: &mut CheckContext<'_>) -> Result<bool> {
            Ok(true)
        }
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CheckRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_create() {
        let mut registry = CheckRegistry::new();
        registry.register(|| Box::new(MockCheck));

        assert!(registry.contains("MOCK.RULE"));
        assert_eq!(
            registry.create("MOCK.RULE").map(|c| c.name().to_string()),
            Some("MOCK.RULE".to_string())
        );
        assert!(registry.create("UNKNOWN").is_none());
    }

    #[test]
    fn registry_default_is_empty() {
        assert!(CheckRegistry::default().is_empty());
    }

    #[test]
    fn registry_with_builtins_has_checks() {
        let registry = CheckRegistry::with_builtins();
        assert_eq!(registry.len(), 9);
        assert!(registry.contains("TOPLEVEL.CMAKE"));
        assert!(registry.contains("TOPLEVEL.LICENSE"));
        assert!(registry.contains("TOPLEVEL.README"));
        assert!(registry.contains("README.TITLE"));
        assert!(registry.contains("README.BADGES"));
        assert!(registry.contains("LICENSE.APACHE_LLVM"));
        assert!(registry.contains("REPOSITORY.NAME"));
        assert!(registry.contains("DIRECTORY.INTERFACE_HEADERS"));
        assert!(registry.contains("FILE.LICENSE_ID"));
    }

    #[test]
    fn builtin_checks_are_all_in_the_standard() {
        let catalog = builtin_catalog().unwrap();
        let registry = CheckRegistry::with_builtins();
        for name in registry.names() {
            assert!(catalog.contains(name), "{name} missing from the standard");
        }
    }

    #[test]
    fn names_are_sorted() {
        let registry = CheckRegistry::with_builtins();
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
