//! Directory layout rules.

use crate::checks::{Check, CheckContext, SkipDecision};
use crate::error::Result;

/// Public headers live in `include/beman/<short_name>/`.
pub struct DirectoryInterfaceHeadersCheck;

impl Check for DirectoryInterfaceHeadersCheck {
    fn name(&self) -> &str {
        "DIRECTORY.INTERFACE_HEADERS"
    }

    fn should_skip(&self, ctx: &CheckContext<'_>) -> SkipDecision {
        if ctx.repo().path("include").is_dir() {
            SkipDecision::run()
        } else {
            SkipDecision::skip("The repository has no include/ directory.")
        }
    }

    fn check(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        if !ctx.base_check() {
            return Ok(false);
        }

        let repo = ctx.repo();
        let expected = repo.path("include").join("beman").join(&repo.name);
        if expected.is_dir() {
            return Ok(true);
        }

        ctx.log(format!(
            "Public headers must be placed in 'include/beman/{}/'.",
            repo.name
        ));
        Ok(false)
    }
}
