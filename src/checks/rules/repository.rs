//! Repository naming rules.

use regex::Regex;
use std::sync::LazyLock;

use crate::checks::{Check, CheckContext};
use crate::error::Result;

static SNAKE_CASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(?:_[a-z0-9]+)*$").expect("SNAKE_CASE_REGEX must compile")
});

/// Recommends a snake_case repository name without the `beman` prefix.
pub struct RepositoryNameCheck;

impl Check for RepositoryNameCheck {
    fn name(&self) -> &str {
        "REPOSITORY.NAME"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        if !ctx.base_check() {
            return Ok(false);
        }

        let name = ctx.repo().name.as_str();
        if name.starts_with("beman") {
            ctx.log(format!(
                "The repository name '{}' should not carry the 'beman' prefix.",
                name
            ));
            return Ok(false);
        }

        if !SNAKE_CASE_REGEX.is_match(name) {
            ctx.log(format!(
                "The repository name '{}' should be snake_case.",
                name
            ));
            return Ok(false);
        }

        Ok(true)
    }
}
