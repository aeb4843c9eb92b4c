//! Error types for service configuration loading.
//!
//! Responsibilities:
//! - Define one error variant per policy violation (disallowed file, malformed
//!   document, missing `_defaults`, banned `exclude`).
//! - Define the ambient failures around them (I/O, YAML parsing, registry merge,
//!   settings resolution, dotenv).
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see `crates/cli/src/error.rs`).
//!
//! Invariants:
//! - Every variant names the offending path so operators can fix the
//!   configuration without reading source.
//! - The two structural variants (`MissingDefaults`, `ExcludeDirectiveForbidden`)
//!   carry a corrective example in their message.
//! - Dotenv errors NEVER include raw .env line contents.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::DEFAULTS_SNIPPET;

/// Error returned by a [`ServiceRegistry`](crate::ServiceRegistry) merge.
pub type MergeError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while validating or loading a configuration directory.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error(
        "Configuration directory \"{directory}\" contains disallowed file \"{file}\"; only these files are allowed: {allowed}"
    )]
    DisallowedFile {
        directory: PathBuf,
        file: String,
        allowed: String,
    },

    #[error("YAML file \"{path}\" must contain a valid `services` mapping")]
    MalformedDocument { path: PathBuf },

    #[error(
        "YAML file \"{path}\" must contain a `services._defaults` block. Add:\n{snippet}",
        snippet = DEFAULTS_SNIPPET
    )]
    MissingDefaults { path: PathBuf },

    #[error(
        "YAML file \"{path}\" must not use the `exclude` directive (service \"{service}\").\n\
         Reason: `exclude` makes service wiring harder to read and maintain.\n\
         Instead: configure the service with attributes on the class itself, \
         or declare each service explicitly in services.yaml"
    )]
    ExcludeDirectiveForbidden { path: PathBuf, service: String },

    #[error("The file \"{path}\" does not exist")]
    ResourceNotFound { path: PathBuf },

    #[error("Failed to read configuration directory \"{directory}\": {source}")]
    DirectoryRead {
        directory: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read YAML file \"{path}\": {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse YAML file \"{path}\": {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to merge \"{path}\" into the service registry: {source}")]
    Merge { path: PathBuf, source: MergeError },

    #[error("No DBAL configuration found; expected a `dbal` mapping in at least one extension config")]
    MissingDbalConfig,

    #[error("Configuration directory is required. Set SERVICE_LOADER_CONFIG_DIR or pass --config-dir.")]
    MissingConfigDir,

    /// SAFETY: only the byte index of the failure is reported, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl LoaderError {
    /// Returns true for violations of the directory/document policy, as opposed
    /// to I/O, parse, or environment failures.
    pub fn is_policy_violation(&self) -> bool {
        matches!(
            self,
            LoaderError::DisallowedFile { .. }
                | LoaderError::MalformedDocument { .. }
                | LoaderError::MissingDefaults { .. }
                | LoaderError::ExcludeDirectiveForbidden { .. }
        )
    }
}
