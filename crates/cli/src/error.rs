//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map LoaderError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 2 is left to clap for usage errors.

use service_loader::LoaderError;

/// Structured exit codes for service-loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - I/O, merge, or environment failure.
    GeneralError = 1,

    /// Resource not found - the mandatory base file or an input file is missing.
    NotFound = 4,

    /// Validation error - the configuration breaks the directory or document policy.
    ///
    /// Scripts should fix the configuration; retrying will not help.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&LoaderError> for ExitCode {
    fn from(err: &LoaderError) -> Self {
        match err {
            LoaderError::DisallowedFile { .. }
            | LoaderError::MalformedDocument { .. }
            | LoaderError::MissingDefaults { .. }
            | LoaderError::ExcludeDirectiveForbidden { .. }
            | LoaderError::Parse { .. }
            | LoaderError::MissingDbalConfig => ExitCode::ValidationError,

            LoaderError::ResourceNotFound { .. } => ExitCode::NotFound,
            LoaderError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ExitCode::NotFound
            }

            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no LoaderError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<LoaderError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
