//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, TidyTheme, UserInterface};

/// Terminal UI: messages to stdout, warnings and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: TidyTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: TidyTheme::with_colors(should_use_colors()),
            mode,
        }
    }

    /// Force colors on or off.
    pub fn with_colors(mut self, use_color: bool) -> Self {
        self.theme = TidyTheme::with_colors(use_color);
        self
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.warning.apply_to(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.failed.apply_to(msg)).ok();
    }
}

/// Create the terminal UI for the given mode.
pub fn create_ui(mode: OutputMode, use_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode).with_colors(use_color))
}
