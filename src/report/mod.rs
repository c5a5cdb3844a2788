//! Summary and coverage rendering.
//!
//! The [`Reporter`] never changes counts. It turns a finished
//! [`PipelineReport`] into the two summary lines and the three coverage
//! lines printed at the end of every run.

use console::Style;

use crate::error::Result;
use crate::pipeline::{Coverage, PipelineReport};
use crate::standard::CheckKind;
use crate::ui::{TidyTheme, UserInterface};

/// Severity of a coverage line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageColor {
    /// Full coverage.
    Success,
    /// Partial coverage.
    Warning,
    /// No coverage.
    Failure,
    /// Informational line, rendered without severity.
    Neutral,
}

/// Map a coverage percentage to its severity.
///
/// `neutral` forces [`CoverageColor::Neutral`], used for the RECOMMENDATION
/// line under require-all.
pub fn coverage_color(percentage: f64, neutral: bool) -> CoverageColor {
    if neutral {
        CoverageColor::Neutral
    } else if percentage >= 100.0 {
        CoverageColor::Success
    } else if percentage <= 0.0 {
        CoverageColor::Failure
    } else {
        CoverageColor::Warning
    }
}

/// Renders the end-of-run summary.
pub struct Reporter {
    theme: TidyTheme,
}

impl Reporter {
    /// Create a reporter with the given theme.
    pub fn new(theme: TidyTheme) -> Self {
        Self { theme }
    }

    /// Print the summary and coverage blocks and return the failure count.
    ///
    /// # Errors
    ///
    /// Fails when coverage is undefined because no REQUIREMENT is implemented.
    /// The summary lines are printed first in that case.
    pub fn render(&self, report: &PipelineReport, ui: &mut dyn UserInterface) -> Result<usize> {
        for line in self.summary_lines(report) {
            ui.message(&line);
        }

        let coverage = report.coverage()?;
        ui.message("");
        for line in self.coverage_lines(report, &coverage) {
            ui.message(&line);
        }

        Ok(report.failure_count())
    }

    /// One line per kind with passed, failed, skipped and unimplemented counts.
    pub fn summary_lines(&self, report: &PipelineReport) -> Vec<String> {
        CheckKind::ALL
            .iter()
            .map(|&kind| {
                format!(
                    "Summary {:>14}: {}, {}, {}, {} checks NOT IMPLEMENTED.",
                    kind.as_str(),
                    self.theme
                        .passed
                        .apply_to(format!("{} checks PASSED", report.passed[kind])),
                    self.theme
                        .failed
                        .apply_to(format!("{} checks FAILED", report.failed[kind])),
                    self.theme
                        .skipped
                        .apply_to(format!("{} checks SKIPPED", report.skipped[kind])),
                    report.not_implemented[kind],
                )
            })
            .collect()
    }

    /// REQUIREMENT, RECOMMENDATION and TOTAL coverage lines.
    pub fn coverage_lines(&self, report: &PipelineReport, coverage: &Coverage) -> Vec<String> {
        let rows = [
            (
                "REQUIREMENT",
                coverage.requirement,
                coverage.passed_requirement,
                coverage.total_requirement,
                false,
            ),
            (
                "RECOMMENDATION",
                coverage.recommendation,
                coverage.passed_recommendation,
                coverage.total_recommendation,
                report.require_all,
            ),
            (
                "TOTAL",
                coverage.total,
                coverage.total_passed,
                coverage.total_implemented,
                false,
            ),
        ];

        rows.iter()
            .map(|&(label, percentage, passed, total, neutral)| {
                let line = format!(
                    "Coverage {:>14}: {:6.2}% ({}/{} checks passed).",
                    label, percentage, passed, total
                );
                self.style(coverage_color(percentage, neutral))
                    .apply_to(line)
                    .to_string()
            })
            .collect()
    }

    fn style(&self, color: CoverageColor) -> &Style {
        match color {
            CoverageColor::Success => &self.theme.passed,
            CoverageColor::Warning => &self.theme.warning,
            CoverageColor::Failure => &self.theme.failed,
            CoverageColor::Neutral => &self.theme.skipped,
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(TidyTheme::plain())
    }
}
