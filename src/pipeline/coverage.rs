//! Coverage arithmetic.
//!
//! Coverage is the percentage of implemented rules that passed or were
//! skipped. Under require-all every rule counts as a REQUIREMENT and the
//! RECOMMENDATION figures are forced to zero.

use super::runner::PipelineReport;
use crate::error::{Result, TidyError};
use crate::standard::CheckKind::{Recommendation, Requirement};

/// Coverage figures for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    pub passed_requirement: usize,
    pub total_requirement: usize,
    /// Percentage, rounded to two decimals.
    pub requirement: f64,
    pub passed_recommendation: usize,
    pub total_recommendation: usize,
    /// Percentage, rounded to two decimals. Zero when nothing is implemented.
    pub recommendation: f64,
    pub total_passed: usize,
    pub total_implemented: usize,
    /// Percentage, rounded to two decimals.
    pub total: f64,
}

impl Coverage {
    /// Compute coverage from a finished run.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::NoImplementedRequirements`] when no REQUIREMENT
    /// is implemented, since requirement coverage has no denominator.
    pub fn compute(report: &PipelineReport) -> Result<Self> {
        let passed = &report.passed;
        let skipped = &report.skipped;
        let implemented = &report.implemented;

        let mut passed_requirement = passed[Requirement] + skipped[Requirement];
        let mut total_requirement = implemented[Requirement];
        if report.require_all {
            passed_requirement += passed[Recommendation] + skipped[Recommendation];
            total_requirement += implemented[Recommendation];
        }
        if total_requirement == 0 {
            return Err(TidyError::NoImplementedRequirements);
        }

        let (passed_recommendation, total_recommendation) = if report.require_all {
            (0, 0)
        } else {
            (
                passed[Recommendation] + skipped[Recommendation],
                implemented[Recommendation],
            )
        };

        let total_passed = passed.total() + skipped.total();
        let total_implemented = total_requirement + total_recommendation;

        Ok(Self {
            passed_requirement,
            total_requirement,
            requirement: percentage(passed_requirement, total_requirement),
            passed_recommendation,
            total_recommendation,
            recommendation: percentage(passed_recommendation, total_recommendation),
            total_passed,
            total_implemented,
            total: percentage(total_passed, total_implemented),
        })
    }
}

/// `passed / total * 100` rounded to two decimals; zero for an empty total.
fn percentage(passed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let value = passed as f64 / total as f64 * 100.0;
    (value * 100.0).round() / 100.0
}
