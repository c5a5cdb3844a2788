//! README content rules.

use regex::Regex;
use std::sync::LazyLock;

use crate::checks::{Check, CheckContext, TargetFile};
use crate::error::Result;

const README: &str = "README.md";

/// `# beman.<short_name>: <Description>`
static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^# beman\.(?P<short>[a-z0-9_]+): (?P<title>\S.*)$")
        .expect("TITLE_REGEX must compile")
});

/// Old-style or prefixed heading, used to recover the description.
static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s+(?:beman\.[A-Za-z0-9_.-]*\s*:?\s*)?(?P<title>.*?)\s*$")
        .expect("HEADING_REGEX must compile")
});

/// Library status badge pointing at the Beman badge images.
static STATUS_BADGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"!\[Library Status\]\(https://raw\.githubusercontent\.com/bemanproject/beman/[^)]+\.svg\)",
    )
    .expect("STATUS_BADGE_REGEX must compile")
});

/// Validates the README title line.
pub struct ReadmeTitleCheck;

impl Check for ReadmeTitleCheck {
    fn name(&self) -> &str {
        "README.TITLE"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        let readme = TargetFile::new(README);
        if !readme.base_check(ctx) {
            return Ok(false);
        }

        let lines = readme.read_lines(ctx)?;
        let first = lines.first().map(String::as_str).unwrap_or_default();
        let repo_name = ctx.repo().name.as_str();

        match TITLE_REGEX.captures(first) {
            Some(caps) if &caps["short"] == repo_name => Ok(true),
            _ => {
                ctx.log(format!(
                    "The first line of '{}' is invalid. It should be: # beman.{}: <Description>",
                    README, repo_name
                ));
                Ok(false)
            }
        }
    }

    fn fix(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        let readme = TargetFile::new(README);
        if !readme.base_check(ctx) {
            return Ok(false);
        }

        let content = readme.read(ctx)?;
        let (first, rest) = content.split_once('\n').unwrap_or((content.as_str(), ""));

        let title = match HEADING_REGEX.captures(first) {
            Some(caps) if !caps["title"].is_empty() => caps["title"].to_string(),
            _ => {
                ctx.log("The README title has no description to keep; fix it manually.");
                return Ok(false);
            }
        };

        let fixed = format!("# beman.{}: {}\n{}", ctx.repo().name, title, rest);
        readme.write(ctx, &fixed)?;
        Ok(true)
    }
}

/// Requires the library status badge after the title.
pub struct ReadmeBadgesCheck;

impl Check for ReadmeBadgesCheck {
    fn name(&self) -> &str {
        "README.BADGES"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        let readme = TargetFile::new(README);
        if !readme.base_check(ctx) {
            return Ok(false);
        }

        let found = readme
            .read_lines(ctx)?
            .iter()
            .any(|line| STATUS_BADGE_REGEX.is_match(line));
        if !found {
            ctx.log(format!(
                "'{}' has no library status badge (![Library Status](...)).",
                README
            ));
        }
        Ok(found)
    }
}
