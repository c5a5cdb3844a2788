//! Check pipeline.
//!
//! This module provides:
//! - [`PipelineRunner`] for running checks and applying the require-all promotion
//! - [`PipelineReport`] with per-kind outcome and catalog counters
//! - [`Coverage`] arithmetic over a finished report

pub mod coverage;
pub mod runner;
pub mod status;

pub use coverage::Coverage;
pub use runner::{PipelineReport, PipelineRunner, RunConfig};
pub use status::{CheckStatus, KindCounts};
