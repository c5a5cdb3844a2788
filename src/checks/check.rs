//! The check lifecycle contract.
//!
//! This module provides the core types every Beman Standard check builds on:
//!
//! - [`Check`] - The trait that all checks must implement
//! - [`CheckContext`] - Per-run state of one check: identity, kind, repository and log
//! - [`SkipDecision`] - Whether a check is inapplicable, and why

use crate::error::Result;
use crate::repository::RepoInfo;
use crate::standard::{Catalog, CheckKind};

/// Body used for checks that have no entry in the catalog.
pub const INTERNAL_CHECK_BODY: &str = "beman-tidy internal check.";

/// Outcome of [`Check::should_skip`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkipDecision {
    /// Whether the check is inapplicable in this repository.
    pub skip: bool,
    /// Why the check is skipped. Empty when `skip` is false.
    pub reason: String,
}

impl SkipDecision {
    /// The check applies and must run.
    pub fn run() -> Self {
        Self::default()
    }

    /// The check does not apply.
    pub fn skip(reason: impl Into<String>) -> Self {
        Self {
            skip: true,
            reason: reason.into(),
        }
    }
}

/// State shared by the lifecycle methods of one check during one run.
///
/// The context resolves the check's kind and body from the catalog, holds a
/// reference to the repository being audited, and buffers log lines until
/// the runner flushes them.
#[derive(Debug)]
pub struct CheckContext<'a> {
    name: String,
    kind: CheckKind,
    body: String,
    repo: &'a RepoInfo,
    log_enabled: bool,
    logs: Vec<String>,
}

impl<'a> CheckContext<'a> {
    /// Create the context for `name`, resolving its kind from the catalog.
    ///
    /// Names missing from the catalog are internal checks: they default to
    /// REQUIREMENT with a placeholder body.
    pub fn new(name: impl Into<String>, repo: &'a RepoInfo, catalog: &Catalog) -> Self {
        let name = name.into();
        let (kind, body) = match catalog.lookup(&name) {
            Some(entry) => (entry.kind, entry.body.clone()),
            None => (CheckKind::Requirement, INTERNAL_CHECK_BODY.to_string()),
        };

        Self {
            name,
            kind,
            body,
            repo,
            log_enabled: true,
            logs: Vec::new(),
        }
    }

    /// The check name, e.g. `README.TITLE`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The effective kind for this run.
    pub fn kind(&self) -> CheckKind {
        self.kind
    }

    /// Rule text from the catalog.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The repository being audited.
    pub fn repo(&self) -> &'a RepoInfo {
        self.repo
    }

    /// `ERROR` for requirements, `WARNING` for recommendations.
    pub fn log_level(&self) -> &'static str {
        self.kind.log_level()
    }

    /// Treat this check as a REQUIREMENT for the rest of its life.
    pub fn convert_to_requirement(&mut self) {
        self.kind = CheckKind::Requirement;
    }

    /// Whether [`log`](Self::log) records messages.
    pub fn log_enabled(&self) -> bool {
        self.log_enabled
    }

    /// Enable or disable logging.
    pub fn set_log_enabled(&mut self, enabled: bool) {
        self.log_enabled = enabled;
    }

    /// Record `[<LEVEL>][<name>]: <message>` if logging is enabled.
    pub fn log(&mut self, message: impl AsRef<str>) {
        if self.log_enabled {
            self.logs.push(format!(
                "[{}][{}]: {}",
                self.log_level(),
                self.name,
                message.as_ref()
            ));
        }
    }

    /// Drain the buffered log lines.
    pub fn take_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.logs)
    }

    /// Validate that the check and repository are properly initialized.
    ///
    /// Never fails hard: violations are logged and reported as `false`.
    pub fn base_check(&mut self) -> bool {
        if self.name.is_empty() {
            self.log("The name is not set.");
            return false;
        }

        if self.repo.name.is_empty() {
            let msg = format!("The repo_name is not set for check = {}.", self.name);
            self.log(msg);
            return false;
        }

        if self.repo.top_level.as_os_str().is_empty() {
            let msg = format!("The repo_path is not set for check = {}.", self.name);
            self.log(msg);
            return false;
        }

        true
    }
}

/// A Beman Standard check.
///
/// The runner drives every check through the same lifecycle:
/// [`should_skip`](Check::should_skip), then [`pre_check`](Check::pre_check)
/// and [`check`](Check::check), then [`fix`](Check::fix) when the check
/// failed and fixing is enabled.
///
/// `check` and `fix` report expected outcomes as booleans. An `Err` is a
/// defect or an abort signal and stops the whole run.
pub trait Check {
    /// Name of the rule this check enforces.
    fn name(&self) -> &str;

    /// Decide whether the rule is inapplicable in this repository.
    ///
    /// Must not have side effects.
    fn should_skip(&self, _ctx: &CheckContext<'_>) -> SkipDecision {
        SkipDecision::run()
    }

    /// Gating step run before [`check`](Check::check).
    fn pre_check(&self, _ctx: &mut CheckContext<'_>) -> bool {
        true
    }

    /// Return `true` if the repository already satisfies the rule.
    ///
    /// Implementations start by calling [`CheckContext::base_check`] (or a
    /// helper that does).
    fn check(&self, ctx: &mut CheckContext<'_>) -> Result<bool>;

    /// Try to make the repository satisfy the rule.
    ///
    /// Returns `Ok(false)` when the rule can't be fixed automatically.
    fn fix(&self, _ctx: &mut CheckContext<'_>) -> Result<bool> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard::CatalogEntry;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new("R1", CheckKind::Requirement, "Must do it."),
            CatalogEntry::new("R2", CheckKind::Recommendation, "Should do it."),
        ])
        .unwrap()
    }

    fn repo() -> RepoInfo {
        RepoInfo::new("exemplar", "/repos/exemplar")
    }

    struct NoopCheck;

    impl Check for NoopCheck {
        fn name(&self) -> &str {
            "R1"
        }

        fn check(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
            Ok(ctx.base_check())
        }
    }

    #[test]
    fn context_resolves_kind_from_catalog() {
        let catalog = catalog();
        let repo = repo();

        let ctx = CheckContext::new("R2", &repo, &catalog);

        assert_eq!(ctx.kind(), CheckKind::Recommendation);
        assert_eq!(ctx.body(), "Should do it.");
        assert_eq!(ctx.log_level(), "WARNING");
    }

    #[test]
    fn unknown_name_defaults_to_internal_requirement() {
        let catalog = catalog();
        let repo = repo();

        let ctx = CheckContext::new("SOMETHING.ELSE", &repo, &catalog);

        assert_eq!(ctx.kind(), CheckKind::Requirement);
        assert_eq!(ctx.body(), INTERNAL_CHECK_BODY);
    }

    #[test]
    fn convert_to_requirement_changes_severity() {
        let catalog = catalog();
        let repo = repo();
        let mut ctx = CheckContext::new("R2", &repo, &catalog);

        ctx.convert_to_requirement();
        ctx.log("promoted");

        assert_eq!(ctx.kind(), CheckKind::Requirement);
        assert_eq!(ctx.take_logs(), vec!["[ERROR][R2]: promoted".to_string()]);
        // Catalog membership is unchanged.
        assert_eq!(
            catalog.lookup("R2").map(|e| e.kind),
            Some(CheckKind::Recommendation)
        );
    }

    #[test]
    fn log_formats_level_and_name() {
        let catalog = catalog();
        let repo = repo();
        let mut ctx = CheckContext::new("R2", &repo, &catalog);

        ctx.log("The name should be snake_case.");

        assert_eq!(
            ctx.take_logs(),
            vec!["[WARNING][R2]: The name should be snake_case.".to_string()]
        );
        assert!(ctx.take_logs().is_empty());
    }

    #[test]
    fn log_is_suppressed_when_disabled() {
        let catalog = catalog();
        let repo = repo();
        let mut ctx = CheckContext::new("R1", &repo, &catalog);

        ctx.set_log_enabled(false);
        ctx.log("hidden");
        ctx.set_log_enabled(true);
        ctx.log("shown");

        assert_eq!(ctx.take_logs(), vec!["[ERROR][R1]: shown".to_string()]);
    }

    #[test]
    fn base_check_passes_for_initialized_repo() {
        let catalog = catalog();
        let repo = repo();
        let mut ctx = CheckContext::new("R1", &repo, &catalog);

        assert!(ctx.base_check());
        assert!(ctx.take_logs().is_empty());
    }

    #[test]
    fn base_check_fails_without_repo_name() {
        let catalog = catalog();
        let repo = RepoInfo::new("", "/repos/exemplar");
        let mut ctx = CheckContext::new("R1", &repo, &catalog);

        assert!(!ctx.base_check());
        assert!(ctx.take_logs()[0].contains("repo_name is not set"));
    }

    #[test]
    fn base_check_fails_without_repo_path() {
        let catalog = catalog();
        let repo = RepoInfo::new("exemplar", "");
        let mut ctx = CheckContext::new("R1", &repo, &catalog);

        assert!(!ctx.base_check());
        assert!(ctx.take_logs()[0].contains("repo_path is not set"));
    }

    #[test]
    fn base_check_fails_without_name() {
        let catalog = catalog();
        let repo = repo();
        let mut ctx = CheckContext::new("", &repo, &catalog);

        assert!(!ctx.base_check());
    }

    #[test]
    fn trait_defaults() {
        let catalog = catalog();
        let repo = repo();
        let mut ctx = CheckContext::new("R1", &repo, &catalog);
        let check = NoopCheck;

        assert_eq!(check.should_skip(&ctx), SkipDecision::run());
        assert!(check.pre_check(&mut ctx));
        assert!(check.check(&mut ctx).unwrap());
        assert!(!check.fix(&mut ctx).unwrap());
    }

    #[test]
    fn skip_decision_carries_reason() {
        let decision = SkipDecision::skip("no include/ directory");
        assert!(decision.skip);
        assert_eq!(decision.reason, "no include/ directory");
        assert!(!SkipDecision::run().skip);
    }
}
