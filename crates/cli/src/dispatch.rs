//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handler.
//! - Resolve loader settings for commands that operate on a directory.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Output formatting (see each command module).

use anyhow::{Context, Result};
use service_loader::{Environment, LoaderSettings, ResolvedSettings};

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check => {
            let settings = resolve_settings(cli.config_dir, cli.env)?;
            commands::check::run(&settings, cli.output)?;
        }
        Commands::Files => {
            let settings = resolve_settings(cli.config_dir, cli.env)?;
            commands::files::run(&settings.config_dir, cli.output)?;
        }
        Commands::Validate { file } => {
            commands::validate::run(&file, cli.output)?;
        }
        Commands::DeriveConnection { file, name } => {
            commands::derive_connection::run(&file, &name, cli.output)?;
        }
    }

    Ok(())
}

/// CLI values override `SERVICE_LOADER_*` environment variables.
fn resolve_settings(
    config_dir: Option<std::path::PathBuf>,
    env: Option<String>,
) -> Result<ResolvedSettings> {
    let mut settings = LoaderSettings::new();

    // Blank values fall back to the environment variable
    if let Some(dir) = config_dir.filter(|d| !d.as_os_str().to_string_lossy().trim().is_empty()) {
        settings = settings.with_config_dir(dir);
    }
    if let Some(env) = env.filter(|e| !e.trim().is_empty()) {
        settings = settings.with_environment(Environment::from(env.trim()));
    }

    let settings = settings
        .from_env()
        .build()
        .context("Failed to resolve loader settings")?;

    tracing::debug!(
        config_dir = %settings.config_dir.display(),
        environment = %settings.environment,
        "Resolved loader settings"
    );

    Ok(settings)
}
