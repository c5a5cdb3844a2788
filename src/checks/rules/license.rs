//! License text rules.

use crate::checks::{Check, CheckContext, TargetFile};
use crate::error::Result;

/// Phrases the Apache License v2.0 with LLVM Exceptions must contain.
const APACHE_LLVM_MARKERS: [&str; 3] = ["Apache License", "Version 2.0", "LLVM Exceptions"];

/// Recommends the Apache License v2.0 with LLVM Exceptions.
pub struct LicenseApacheLlvmCheck;

impl Check for LicenseApacheLlvmCheck {
    fn name(&self) -> &str {
        "LICENSE.APACHE_LLVM"
    }

    fn check(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        let license = TargetFile::new("LICENSE");
        if !license.base_check(ctx) {
            return Ok(false);
        }

        let content = license.read(ctx)?;
        let missing: Vec<&str> = APACHE_LLVM_MARKERS
            .iter()
            .copied()
            .filter(|marker| !content.contains(marker))
            .collect();

        if missing.is_empty() {
            return Ok(true);
        }

        ctx.log(format!(
            "LICENSE is not the Apache License v2.0 with LLVM Exceptions (missing: {}).",
            missing.join(", ")
        ));
        Ok(false)
    }
}
