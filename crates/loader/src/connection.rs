//! Database connection config derivation.
//!
//! Responsibilities:
//! - Pick a representative DBAL connection from existing extension configs.
//! - Derive the settings for an additional named connection from it.
//!
//! Does NOT handle:
//! - Service configuration loading; this module is independent of `loader.rs`.
//!
//! Invariants:
//! - Inputs are never mutated; derived mappings are fresh copies.
//! - `use_savepoints` is always stripped and `profiling_collect_backtrace`
//!   is always `true` in the derived mapping.

use serde_yaml::{Mapping, Value};

use crate::constants::{CONNECTIONS_KEY, DBAL_KEY, PROFILING_BACKTRACE_KEY, USE_SAVEPOINTS_KEY};
use crate::error::LoaderError;

/// First `dbal` mapping found across extension configs, in order.
pub fn find_dbal_config(configs: &[Value]) -> Option<&Mapping> {
    configs
        .iter()
        .find_map(|config| config.get(DBAL_KEY).and_then(Value::as_mapping))
}

/// Derive connection settings from a `dbal` mapping.
///
/// Uses the first entry of `connections` when it is a mapping, otherwise the
/// `dbal` mapping itself.
pub fn derive_connection_config(dbal: &Mapping) -> Mapping {
    let representative = dbal
        .get(CONNECTIONS_KEY)
        .and_then(Value::as_mapping)
        .and_then(|connections| connections.values().next())
        .and_then(Value::as_mapping)
        .unwrap_or(dbal);

    let mut derived = representative.clone();
    derived.shift_remove(USE_SAVEPOINTS_KEY);
    derived.insert(Value::from(PROFILING_BACKTRACE_KEY), Value::Bool(true));
    derived
}

/// Build the `{dbal: {connections: {<name>: ...}}}` document to prepend.
///
/// # Errors
///
/// Returns `MissingDbalConfig` when no config carries a `dbal` mapping.
pub fn connection_override(configs: &[Value], name: &str) -> Result<Value, LoaderError> {
    let dbal = find_dbal_config(configs).ok_or(LoaderError::MissingDbalConfig)?;

    let mut connections = Mapping::new();
    connections.insert(
        Value::from(name),
        Value::Mapping(derive_connection_config(dbal)),
    );

    let mut dbal_override = Mapping::new();
    dbal_override.insert(Value::from(CONNECTIONS_KEY), Value::Mapping(connections));

    let mut root = Mapping::new();
    root.insert(Value::from(DBAL_KEY), Value::Mapping(dbal_override));

    tracing::debug!(connection = name, "Derived DBAL connection override");
    Ok(Value::Mapping(root))
}
