//! beman-tidy CLI entry point.

use std::process::ExitCode;

use beman_tidy::cli::{Cli, CommandDispatcher};
use beman_tidy::ui::{create_ui, should_use_colors, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("beman_tidy=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("beman_tidy=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("beman-tidy starting with args: {:?}", cli);

    let output_mode = OutputMode::from_verbose(cli.verbose);
    let use_color = !cli.no_color && should_use_colors();

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot determine current directory: {}", e);
            return ExitCode::from(1);
        }
    };

    let mut ui = create_ui(output_mode, use_color);
    let dispatcher = CommandDispatcher::new(working_dir).with_colors(use_color);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code())
        }
    }
}
