//! Centralized constants for the service loader.
//!
//! File names, document keys, and environment variable names live here so
//! validators, the loader, and the CLI agree on a single spelling.

// =============================================================================
// File Conventions
// =============================================================================

/// Extensions recognized as configuration files, in lookup priority order.
pub const CONFIG_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// File stem of the unconditionally loaded base file.
pub const BASE_FILE_STEM: &str = "services";

/// File stem of the `dev` override file.
pub const DEV_FILE_STEM: &str = "services_dev";

/// File stem of the `test` override file.
pub const TEST_FILE_STEM: &str = "services_test";

// =============================================================================
// Document Keys
// =============================================================================

/// Top-level key holding service definitions.
pub const SERVICES_KEY: &str = "services";

/// Top-level key holding container parameters.
pub const PARAMETERS_KEY: &str = "parameters";

/// Required entry inside `services`.
pub const DEFAULTS_KEY: &str = "_defaults";

/// Banned per-service directive.
pub const EXCLUDE_KEY: &str = "exclude";

/// Prefix of reserved `services` entries that are not service definitions.
pub const RESERVED_PREFIX: char = '_';

/// Reserved `services` entries understood by the container.
pub const RESERVED_ENTRIES: [&str; 2] = [DEFAULTS_KEY, "_instanceof"];

/// Minimal `_defaults` block shown to operators when it is missing.
pub const DEFAULTS_SNIPPET: &str = "services:\n  _defaults:\n    autowire: true\n    autoconfigure: true";

// =============================================================================
// Database Connection Keys
// =============================================================================

pub const DBAL_KEY: &str = "dbal";
pub const CONNECTIONS_KEY: &str = "connections";
pub const USE_SAVEPOINTS_KEY: &str = "use_savepoints";
pub const PROFILING_BACKTRACE_KEY: &str = "profiling_collect_backtrace";

// =============================================================================
// Environment
// =============================================================================

/// Environment variable naming the configuration directory.
pub const ENV_CONFIG_DIR: &str = "SERVICE_LOADER_CONFIG_DIR";

/// Environment variable naming the runtime environment.
pub const ENV_ENVIRONMENT: &str = "SERVICE_LOADER_ENV";

/// Gate that disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

/// Environment used when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "prod";
