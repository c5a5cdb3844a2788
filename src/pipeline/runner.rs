//! Check pipeline execution.
//!
//! The [`PipelineRunner`] runs a requested list of rule names against the
//! [`CheckRegistry`], applies the require-all promotion, and tallies the
//! outcomes per kind into a [`PipelineReport`].

use super::coverage::Coverage;
use super::status::{CheckStatus, KindCounts};
use crate::checks::{Check, CheckContext, CheckRegistry, DisallowFixInplaceAndUnstagedChangesCheck};
use crate::error::Result;
use crate::repository::RepoInfo;
use crate::standard::{Catalog, CheckKind};
use crate::ui::UserInterface;

/// Options for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Show per-check progress and check log lines.
    pub verbose: bool,
    /// Try to fix failed checks in place.
    pub fix_inplace: bool,
    /// Treat every RECOMMENDATION as a REQUIREMENT.
    pub require_all: bool,
}

/// Per-kind outcome counters of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Whether the run promoted recommendations.
    pub require_all: bool,
    /// Requested checks that passed (including fixed ones).
    pub passed: KindCounts,
    /// Requested checks that failed.
    pub failed: KindCounts,
    /// Requested checks that were skipped.
    pub skipped: KindCounts,
    /// Every rule in the catalog.
    pub all_in_catalog: KindCounts,
    /// Catalog rules with a registered check.
    pub implemented: KindCounts,
    /// Catalog rules without a registered check.
    pub not_implemented: KindCounts,
}

impl PipelineReport {
    /// Create an empty report.
    pub fn new(require_all: bool) -> Self {
        Self {
            require_all,
            ..Default::default()
        }
    }

    /// Record the outcome of one check.
    pub fn record(&mut self, kind: CheckKind, status: CheckStatus) {
        match status {
            CheckStatus::Passed => self.passed.increment(kind),
            CheckStatus::Failed => self.failed.increment(kind),
            CheckStatus::Skipped => self.skipped.increment(kind),
        }
    }

    /// Number of failures that make the run unsuccessful.
    ///
    /// RECOMMENDATION failures only count under require-all.
    pub fn failure_count(&self) -> usize {
        let recommendation = if self.require_all {
            self.failed[CheckKind::Recommendation]
        } else {
            0
        };
        self.failed[CheckKind::Requirement] + recommendation
    }

    /// Compute coverage for this run.
    pub fn coverage(&self) -> Result<Coverage> {
        Coverage::compute(self)
    }
}

/// Runs checks against a repository.
pub struct PipelineRunner<'a> {
    catalog: &'a Catalog,
    registry: &'a CheckRegistry,
    config: RunConfig,
}

impl<'a> PipelineRunner<'a> {
    /// Create a runner.
    pub fn new(catalog: &'a Catalog, registry: &'a CheckRegistry, config: RunConfig) -> Self {
        Self {
            catalog,
            registry,
            config,
        }
    }

    /// Run the requested checks and count the catalog.
    ///
    /// Names without a registered check are ignored. When fixing in place,
    /// the unstaged-changes guard runs first; its abort error is returned
    /// before any rule runs.
    pub fn run(
        &self,
        repo: &RepoInfo,
        checks_to_run: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<PipelineReport> {
        self.progress(ui, "beman-tidy pipeline started ...\n");

        if self.config.fix_inplace {
            self.run_check(&DisallowFixInplaceAndUnstagedChangesCheck, repo, ui, true)?;
        }

        let mut report = PipelineReport::new(self.config.require_all);

        for name in checks_to_run {
            let Some(check) = self.registry.create(name) else {
                tracing::debug!("No implementation for '{}', ignoring", name);
                continue;
            };

            let (kind, status) = self.run_check(check.as_ref(), repo, ui, self.config.verbose)?;
            report.record(kind, status);
        }

        for entry in self.catalog.iter() {
            let kind = if self.config.require_all {
                CheckKind::Requirement
            } else {
                entry.kind
            };

            report.all_in_catalog.increment(kind);
            if self.registry.contains(&entry.name) {
                report.implemented.increment(kind);
            } else {
                report.not_implemented.increment(kind);
            }
        }

        self.progress(ui, "\nbeman-tidy pipeline finished.\n");
        Ok(report)
    }

    /// Run one check through its lifecycle.
    ///
    /// Skip decision first, then `pre_check` and `check`, then `fix` when
    /// the check failed and fixing is enabled. A successful fix is PASSED.
    pub fn run_check(
        &self,
        check: &dyn Check,
        repo: &RepoInfo,
        ui: &mut dyn UserInterface,
        log_enabled: bool,
    ) -> Result<(CheckKind, CheckStatus)> {
        let mut ctx = CheckContext::new(check.name(), repo, self.catalog);
        if self.config.require_all && ctx.kind() == CheckKind::Recommendation {
            ctx.convert_to_requirement();
        }
        ctx.set_log_enabled(log_enabled);

        let kind = ctx.kind();
        let label = format!("Running check [{}][{}] ...", kind, ctx.name());
        tracing::debug!("{}", label);
        self.progress(ui, &label);

        let decision = check.should_skip(&ctx);
        if decision.skip {
            if !decision.reason.is_empty() {
                ctx.log(&decision.reason);
            }
            flush_logs(&mut ctx, ui);
            self.finish(ui, &label, CheckStatus::Skipped);
            return Ok((kind, CheckStatus::Skipped));
        }

        let checked = check.pre_check(&mut ctx) && check_then_flush(check, &mut ctx, ui)?;
        let status = if checked {
            CheckStatus::Passed
        } else if self.config.fix_inplace {
            let fixed = check.fix(&mut ctx);
            flush_logs(&mut ctx, ui);
            if fixed? {
                CheckStatus::Passed
            } else {
                CheckStatus::Failed
            }
        } else {
            CheckStatus::Failed
        };

        flush_logs(&mut ctx, ui);
        self.finish(ui, &label, status);
        Ok((kind, status))
    }

    fn progress(&self, ui: &mut dyn UserInterface, msg: &str) {
        if self.config.verbose {
            ui.message(msg);
        }
    }

    fn finish(&self, ui: &mut dyn UserInterface, label: &str, status: CheckStatus) {
        if self.config.verbose {
            ui.message(&format!("\t{} {}\n", label, status));
        }
    }
}

fn check_then_flush(
    check: &dyn Check,
    ctx: &mut CheckContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<bool> {
    let result = check.check(ctx);
    flush_logs(ctx, ui);
    result
}

/// Forward buffered check logs, as errors for requirements and warnings
/// for recommendations.
fn flush_logs(ctx: &mut CheckContext<'_>, ui: &mut dyn UserInterface) {
    let kind = ctx.kind();
    for line in ctx.take_logs() {
        match kind {
            CheckKind::Requirement => ui.error(&line),
            CheckKind::Recommendation => ui.warning(&line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TidyError;
    use crate::standard::CatalogEntry;
    use crate::ui::MockUI;
    use std::cell::Cell;
    use std::path::PathBuf;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new("R1", CheckKind::Requirement, ""),
            CatalogEntry::new("R2", CheckKind::Recommendation, ""),
        ])
        .unwrap()
    }

    fn repo() -> RepoInfo {
        RepoInfo::new("exemplar", "/repos/exemplar")
    }

    struct ScriptedCheck {
        name: &'static str,
        skip: bool,
        pre: bool,
        pass: bool,
        fixes: bool,
        fix_calls: Cell<usize>,
    }

    impl ScriptedCheck {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                skip: false,
                pre: true,
                pass: true,
                fixes: false,
                fix_calls: Cell::new(0),
            }
        }
    }

    impl Check for ScriptedCheck {
        fn name(&self) -> &str {
            self.name
        }

        fn should_skip(&self, _ctx: &CheckContext<'_>) -> crate::checks::SkipDecision {
            if self.skip {
                crate::checks::SkipDecision::skip("not applicable here")
            } else {
                crate::checks::SkipDecision::run()
            }
        }

        fn pre_check(&self, _ctx: &mut CheckContext<'_>) -> bool {
            self.pre
        }

        fn check(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
            if !self.pass {
                ctx.log("violated");
            }
            Ok(ctx.base_check() && self.pass)
        }

        fn fix(&self, _ctx: &mut CheckContext<'_>) -> Result<bool> {
            self.fix_calls.set(self.fix_calls.get() + 1);
            Ok(self.fixes)
        }
    }

    fn run_one(check: &ScriptedCheck, config: RunConfig) -> (CheckKind, CheckStatus, MockUI) {
        let catalog = catalog();
        let registry = CheckRegistry::new();
        let runner = PipelineRunner::new(&catalog, &registry, config);
        let mut ui = MockUI::new();
        let (kind, status) = runner.run_check(check, &repo(), &mut ui, true).unwrap();
        (kind, status, ui)
    }

    #[test]
    fn passing_check_is_passed() {
        let check = ScriptedCheck::new("R1");
        let (kind, status, _) = run_one(&check, RunConfig::default());
        assert_eq!((kind, status), (CheckKind::Requirement, CheckStatus::Passed));
    }

    #[test]
    fn failing_check_is_failed_and_logged_as_error() {
        let check = ScriptedCheck {
            pass: false,
            ..ScriptedCheck::new("R1")
        };
        let (_, status, ui) = run_one(&check, RunConfig::default());
        assert_eq!(status, CheckStatus::Failed);
        assert!(ui.has_error("[ERROR][R1]: violated"));
        assert_eq!(check.fix_calls.get(), 0);
    }

    #[test]
    fn recommendation_logs_are_warnings() {
        let check = ScriptedCheck {
            pass: false,
            ..ScriptedCheck::new("R2")
        };
        let (kind, _, ui) = run_one(&check, RunConfig::default());
        assert_eq!(kind, CheckKind::Recommendation);
        assert!(ui.has_warning("[WARNING][R2]: violated"));
    }

    #[test]
    fn failed_pre_check_short_circuits() {
        let check = ScriptedCheck {
            pre: false,
            ..ScriptedCheck::new("R1")
        };
        let (_, status, ui) = run_one(&check, RunConfig::default());
        assert_eq!(status, CheckStatus::Failed);
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn successful_fix_counts_as_passed() {
        let check = ScriptedCheck {
            pass: false,
            fixes: true,
            ..ScriptedCheck::new("R1")
        };
        let config = RunConfig {
            fix_inplace: true,
            ..Default::default()
        };
        let (_, status, _) = run_one(&check, config);
        assert_eq!(status, CheckStatus::Passed);
        assert_eq!(check.fix_calls.get(), 1);
    }

    #[test]
    fn unsuccessful_fix_is_failed() {
        let check = ScriptedCheck {
            pass: false,
            ..ScriptedCheck::new("R1")
        };
        let config = RunConfig {
            fix_inplace: true,
            ..Default::default()
        };
        let (_, status, _) = run_one(&check, config);
        assert_eq!(status, CheckStatus::Failed);
        assert_eq!(check.fix_calls.get(), 1);
    }

    #[test]
    fn passing_check_is_never_fixed() {
        let check = ScriptedCheck::new("R1");
        let config = RunConfig {
            fix_inplace: true,
            ..Default::default()
        };
        run_one(&check, config);
        assert_eq!(check.fix_calls.get(), 0);
    }

    #[test]
    fn skipped_check_logs_reason_and_never_checks() {
        let check = ScriptedCheck {
            skip: true,
            pass: false,
            ..ScriptedCheck::new("R2")
        };
        let (kind, status, ui) = run_one(&check, RunConfig::default());
        assert_eq!((kind, status), (CheckKind::Recommendation, CheckStatus::Skipped));
        assert!(ui.has_warning("not applicable here"));
        assert!(!ui.has_warning("violated"));
    }

    #[test]
    fn require_all_promotes_recommendation() {
        let check = ScriptedCheck {
            pass: false,
            ..ScriptedCheck::new("R2")
        };
        let config = RunConfig {
            require_all: true,
            ..Default::default()
        };
        let (kind, status, ui) = run_one(&check, config);
        assert_eq!((kind, status), (CheckKind::Requirement, CheckStatus::Failed));
        assert!(ui.has_error("[ERROR][R2]: violated"));
    }

    #[test]
    fn verbose_prints_progress_lines() {
        let catalog = catalog();
        let registry = CheckRegistry::new();
        let config = RunConfig {
            verbose: true,
            ..Default::default()
        };
        let runner = PipelineRunner::new(&catalog, &registry, config);
        let mut ui = MockUI::new();

        runner
            .run_check(&ScriptedCheck::new("R1"), &repo(), &mut ui, true)
            .unwrap();

        assert!(ui.has_message("Running check [REQUIREMENT][R1] ... PASSED"));
    }

    #[test]
    fn quiet_run_prints_no_progress() {
        let (_, _, ui) = run_one(&ScriptedCheck::new("R1"), RunConfig::default());
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn guard_aborts_dirty_fix_run() {
        let catalog = catalog();
        let registry = CheckRegistry::new();
        let config = RunConfig {
            fix_inplace: true,
            ..Default::default()
        };
        let runner = PipelineRunner::new(&catalog, &registry, config);
        let repo = repo().with_unstaged_changes(vec![PathBuf::from("README.md")]);
        let mut ui = MockUI::new();

        let err = runner
            .run(&repo, &["R1".to_string()], &mut ui)
            .unwrap_err();

        assert!(matches!(err, TidyError::UnstagedChanges { .. }));
        assert!(ui.has_error("STOP"));
    }

    #[test]
    fn report_failure_count_ignores_recommendations() {
        let mut report = PipelineReport::new(false);
        report.record(CheckKind::Requirement, CheckStatus::Failed);
        report.record(CheckKind::Recommendation, CheckStatus::Failed);
        assert_eq!(report.failure_count(), 1);

        report.require_all = true;
        assert_eq!(report.failure_count(), 2);
    }
}
