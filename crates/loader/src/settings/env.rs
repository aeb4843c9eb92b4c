//! Environment variable parsing for loader settings.
//!
//! Invariants:
//! - Environment variables never override values already set on the builder.
//! - Returned values are trimmed.

use std::path::PathBuf;

use super::builder::LoaderSettings;
use crate::constants::{ENV_CONFIG_DIR, ENV_ENVIRONMENT};
use crate::environment::Environment;

/// Trimmed value of `key`, or `None` when unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Fill unset builder values from environment variables.
pub(super) fn apply_env(settings: &mut LoaderSettings) {
    if settings.config_dir.is_none()
        && let Some(dir) = env_var_or_none(ENV_CONFIG_DIR)
    {
        settings.config_dir = Some(PathBuf::from(dir));
    }
    if settings.environment.is_none()
        && let Some(env) = env_var_or_none(ENV_ENVIRONMENT)
    {
        settings.environment = Some(Environment::from(env.as_str()));
    }
}
