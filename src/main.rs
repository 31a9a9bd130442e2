//! promise-state CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use promise_state::cli::{Cli, CommandDispatcher};
use promise_state::config::load_or_default;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so stdout carries only the command's JSON.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("promise_state=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("promise_state=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("promise-state starting with args: {:?}", cli);

    let config = match load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match dispatcher.dispatch(&cli, &mut out) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    };
    let _ = out.flush();
    code
}
