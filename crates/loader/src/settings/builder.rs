//! Builder for loader settings.

use std::path::{Path, PathBuf};

use super::env::apply_env;
use crate::constants::{DEFAULT_ENVIRONMENT, ENV_DOTENV_DISABLED};
use crate::environment::Environment;
use crate::error::LoaderError;
use crate::loader::{EnvironmentAwareLoader, LoadReport};
use crate::registry::ServiceRegistry;

/// Collects the configuration directory and environment from several sources.
#[derive(Debug, Clone, Default)]
pub struct LoaderSettings {
    pub(super) config_dir: Option<PathBuf>,
    pub(super) environment: Option<Environment>,
}

impl LoaderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Skipped entirely when `DOTENV_DISABLED` is `true` or `1`. Missing
    /// `.env` files are ignored.
    ///
    /// # Errors
    ///
    /// Returns `DotenvParse` for invalid syntax and `DotenvIo` for read
    /// failures. Neither includes raw `.env` content.
    pub fn load_dotenv(self) -> Result<Self, LoaderError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                Ok(self)
            }
            Err(dotenvy::Error::Io(io_err)) => Err(LoaderError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(dotenvy::Error::LineParse(_, error_index)) => {
                Err(LoaderError::DotenvParse { error_index })
            }
            Err(_) => Err(LoaderError::DotenvUnknown),
        }
    }

    /// Fill values not already set from `SERVICE_LOADER_*` variables.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }

    pub fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    /// Resolve the final settings.
    ///
    /// # Errors
    ///
    /// Returns `MissingConfigDir` when no directory was configured.
    pub fn build(self) -> Result<ResolvedSettings, LoaderError> {
        let config_dir = self.config_dir.ok_or(LoaderError::MissingConfigDir)?;
        let environment = self
            .environment
            .unwrap_or_else(|| Environment::from(DEFAULT_ENVIRONMENT));

        Ok(ResolvedSettings {
            config_dir,
            environment,
        })
    }
}

/// Fully resolved settings for one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub config_dir: PathBuf,
    pub environment: Environment,
}

impl ResolvedSettings {
    /// Load the configured directory into `registry`.
    pub fn load_into<R>(&self, registry: &mut R) -> Result<LoadReport, LoaderError>
    where
        R: ServiceRegistry + ?Sized,
    {
        EnvironmentAwareLoader::new().load(&self.config_dir, &self.environment, registry)
    }
}
