//! Visual theme and styling.

use console::Style;

/// beman-tidy's visual theme.
#[derive(Debug, Clone)]
pub struct TidyTheme {
    /// Style for PASSED and full coverage (green).
    pub passed: Style,
    /// Style for FAILED and zero coverage (red).
    pub failed: Style,
    /// Style for partial coverage and recommendation logs (yellow).
    pub warning: Style,
    /// Style for SKIPPED and informational lines (gray).
    pub skipped: Style,
}

impl Default for TidyTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TidyTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            passed: Style::new().green(),
            failed: Style::new().red(),
            warning: Style::new().yellow(),
            skipped: Style::new().black().bright(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            passed: Style::new(),
            failed: Style::new(),
            warning: Style::new(),
            skipped: Style::new(),
        }
    }

    /// Create the colored or plain theme.
    pub fn with_colors(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
