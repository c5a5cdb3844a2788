//! Output verbosity mode.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show per-check progress and check log lines.
    Verbose,
    /// Show the summary and coverage block only.
    #[default]
    Normal,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Create the mode for a `--verbose` flag.
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows per-check progress.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
