//! Internal guard run before any rule when fixing in place.

use super::check::{Check, CheckContext};
use crate::error::{Result, TidyError};

/// Name of the internal guard. It has no catalog entry.
pub const GUARD_NAME: &str = "FIX_INPLACE_INCOMPATIBLE_WITH_UNSTAGED_CHANGES";

/// Refuses to fix in place while the working tree has unstaged changes.
///
/// `check` passes on a clean tree. `fix` never repairs anything: it returns
/// [`TidyError::UnstagedChanges`], which aborts the whole pipeline.
pub struct DisallowFixInplaceAndUnstagedChangesCheck;

impl Check for DisallowFixInplaceAndUnstagedChangesCheck {
    fn name(&self) -> &str {
        GUARD_NAME
    }

    fn check(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        Ok(ctx.base_check() && ctx.repo().is_clean())
    }

    fn fix(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        ctx.log("The fix cannot be applied inplace. Please commit or stash your changes. STOP.");
        Err(TidyError::UnstagedChanges {
            paths: ctx.repo().unstaged_changes.clone(),
        })
    }
}
