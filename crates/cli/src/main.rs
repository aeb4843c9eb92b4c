//! service-loader - Command-line interface for service configuration directories.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Validate and load configuration directories via the `service-loader` library.
//! - Print results as text or JSON and exit with structured exit codes.
//!
//! Does NOT handle:
//! - Validation or merge policy (see `crates/loader`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout stays parseable.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use service_loader::LoaderSettings;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = LoaderSettings::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    init_tracing(cli.log_json);

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn init_tracing(json: bool) {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
