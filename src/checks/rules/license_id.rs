//! SPDX license identifier rule for C++ files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::checks::{Check, CheckContext, SkipDecision};
use crate::error::Result;

/// Directories scanned for C++ files.
const SOURCE_DIRS: [&str; 2] = ["include", "src"];

const CPP_EXTENSIONS: [&str; 8] = ["h", "hh", "hpp", "hxx", "cc", "cpp", "cxx", "ixx"];

/// How many leading lines may hold the identifier.
const HEADER_LINES: usize = 5;

const LICENSE_ID_MARKER: &str = "SPDX-License-Identifier:";

/// Line prepended by the fix.
const LICENSE_ID_LINE: &str = "// SPDX-License-Identifier: Apache-2.0 WITH LLVM-exception";

/// Every C++ file under `include/` and `src/` carries an SPDX identifier.
pub struct FileLicenseIdCheck;

impl FileLicenseIdCheck {
    fn cpp_files(top_level: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for dir in SOURCE_DIRS {
            let root = top_level.join(dir);
            if root.is_dir() {
                collect_cpp_files(&root, &mut files)?;
            }
        }
        files.sort();
        Ok(files)
    }

    fn missing_license_id(top_level: &Path) -> Result<Vec<PathBuf>> {
        let mut missing = Vec::new();
        for path in Self::cpp_files(top_level)? {
            // Legacy encodings are common in C++ trees; only the header matters.
            let bytes = fs::read(&path)?;
            let has_id = String::from_utf8_lossy(&bytes)
                .lines()
                .take(HEADER_LINES)
                .any(|line| line.contains(LICENSE_ID_MARKER));
            if !has_id {
                missing.push(path);
            }
        }
        Ok(missing)
    }
}

fn collect_cpp_files(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_cpp_files(&path, files)?;
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| CPP_EXTENSIONS.contains(&ext))
        {
            files.push(path);
        }
    }
    Ok(())
}

impl Check for FileLicenseIdCheck {
    fn name(&self) -> &str {
        "FILE.LICENSE_ID"
    }

    fn should_skip(&self, ctx: &CheckContext<'_>) -> SkipDecision {
        match Self::cpp_files(&ctx.repo().top_level) {
            Ok(files) if files.is_empty() => {
                SkipDecision::skip("The repository has no C++ source or header files.")
            }
            // Unreadable trees are reported by check().
            _ => SkipDecision::run(),
        }
    }

    fn check(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        if !ctx.base_check() {
            return Ok(false);
        }

        let top_level = &ctx.repo().top_level;
        let missing = Self::missing_license_id(top_level)?;
        for path in &missing {
            let relative = path.strip_prefix(top_level).unwrap_or(path.as_path());
            ctx.log(format!(
                "The file '{}' has no SPDX-License-Identifier line.",
                relative.display()
            ));
        }
        Ok(missing.is_empty())
    }

    fn fix(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        if !ctx.base_check() {
            return Ok(false);
        }

        for path in Self::missing_license_id(&ctx.repo().top_level)? {
            let mut fixed = format!("{}\n", LICENSE_ID_LINE).into_bytes();
            fixed.extend(fs::read(&path)?);
            fs::write(&path, fixed)?;
        }
        Ok(true)
    }
}
