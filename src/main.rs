//! Sprout CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use sprout::cli::{effective_settings, Cli, CommandDispatcher};
use sprout::ui::{should_use_colors, OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO, or ERROR in quiet mode
///
/// Engine progress is logged at DEBUG, so by default only warnings reach
/// stderr. ANSI styling follows the same rule as the rest of the output.
fn init_tracing(debug: bool, mode: OutputMode) {
    let default_level = if mode.shows_status() {
        "sprout=info"
    } else {
        "sprout=error"
    };
    let filter = if debug {
        EnvFilter::new("sprout=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(should_use_colors())
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --no-color before anything is styled
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    init_tracing(cli.debug, output_mode);
    tracing::debug!("Sprout starting with args: {:?}", cli);

    let mut ui = TerminalUI::new(output_mode);

    let settings = match effective_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            ui.error(&format!("Error [{}]: {}", e.kind(), e));
            return ExitCode::from(1);
        }
    };
    tracing::debug!("Collection source: {}", settings.source.url);

    let dispatcher = CommandDispatcher::new(settings).with_refresh(cli.refresh);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error [{}]: {}", e.kind(), e));
            ExitCode::from(1)
        }
    }
}
