//! Check outcomes and per-kind counters.

use std::ops::{Index, IndexMut};

use crate::standard::CheckKind;

/// Outcome of running one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    /// The rule is satisfied, possibly after a successful fix.
    Passed,
    /// The rule is violated.
    Failed,
    /// The rule does not apply to this repository.
    Skipped,
}

impl CheckStatus {
    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Passed => "PASSED",
            CheckStatus::Failed => "FAILED",
            CheckStatus::Skipped => "SKIPPED",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A counter per [`CheckKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KindCounts {
    pub requirement: usize,
    pub recommendation: usize,
}

impl KindCounts {
    /// Add one to the counter for `kind`.
    pub fn increment(&mut self, kind: CheckKind) {
        self[kind] += 1;
    }

    /// Sum over both kinds.
    pub fn total(&self) -> usize {
        self.requirement + self.recommendation
    }
}

impl Index<CheckKind> for KindCounts {
    type Output = usize;

    fn index(&self, kind: CheckKind) -> &usize {
        match kind {
            CheckKind::Requirement => &self.requirement,
            CheckKind::Recommendation => &self.recommendation,
        }
    }
}

impl IndexMut<CheckKind> for KindCounts {
    fn index_mut(&mut self, kind: CheckKind) -> &mut usize {
        match kind {
            CheckKind::Requirement => &mut self.requirement,
            CheckKind::Recommendation => &mut self.recommendation,
        }
    }
}
