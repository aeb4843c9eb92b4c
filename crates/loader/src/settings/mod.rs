//! Settings resolution for the configuration directory and environment.
//!
//! Responsibilities:
//! - Resolve the configuration directory and environment token from `.env`
//!   files, environment variables, and direct builder methods.
//! - Enforce the `DOTENV_DISABLED` gate before `.env` loading.
//!
//! Does NOT handle:
//! - Loading service configuration (see `loader.rs`); resolved settings are
//!   passed to `EnvironmentAwareLoader::load` explicitly.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - The environment defaults to `prod` when nothing is configured.

mod builder;
mod env;

pub use builder::{LoaderSettings, ResolvedSettings};
pub use env::env_var_or_none;
