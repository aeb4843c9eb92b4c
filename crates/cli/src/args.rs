//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and `SERVICE_LOADER_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve settings precedence (see `service_loader::LoaderSettings`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "service-loader")]
#[command(about = "Validate and load per-environment service configuration directories", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  service-loader --config-dir config check\n  service-loader --config-dir config --env dev check --output json\n  service-loader --config-dir config files\n  service-loader validate config/services_dev.yaml\n  service-loader derive-connection doctrine.yaml --name audit\n"
)]
pub struct Cli {
    /// Directory containing services.yaml and its environment overrides
    #[arg(short = 'd', long, global = true, env = "SERVICE_LOADER_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Runtime environment (dev and test load an override file)
    #[arg(short, long, global = true, env = "SERVICE_LOADER_ENV")]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Emit logs as JSON lines on stderr (filter with RUST_LOG)
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the directory and load it into an in-memory registry
    Check,

    /// Only check that the directory holds whitelisted YAML files
    Files,

    /// Validate a single configuration file's content
    Validate {
        /// YAML file to validate
        file: PathBuf,
    },

    /// Derive an additional DBAL connection from existing doctrine configs
    DeriveConnection {
        /// YAML file holding one doctrine config mapping or a sequence of them
        file: PathBuf,

        /// Name of the connection to derive
        #[arg(short, long)]
        name: String,
    },
}
