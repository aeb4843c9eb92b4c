//! Shared test utilities for service-loader integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write fixture configuration directories.
//!
//! Invariants / Assumptions:
//! - `SERVICE_LOADER_*` variables from the host never leak into tests.

use std::fs;
use std::path::Path;

use assert_cmd::Command;

#[allow(dead_code)]
pub const BASE_YAML: &str = "services:\n  _defaults:\n    autowire: true\n    autoconfigure: true\n\n  TestService:\n    class: stdClass\n";

#[allow(dead_code)]
pub const DEV_YAML: &str = "services:\n  _defaults:\n    autowire: true\n\n  DevService:\n    class: stdClass\n";

/// Returns a hermetic `service-loader` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `SERVICE_LOADER_*` and `RUST_LOG` are cleared.
pub fn loader_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("service-loader");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("SERVICE_LOADER_CONFIG_DIR")
        .env_remove("SERVICE_LOADER_ENV")
        .env_remove("RUST_LOG");

    cmd
}

/// Writes `name` with `content` inside `dir`.
#[allow(dead_code)]
pub fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}
