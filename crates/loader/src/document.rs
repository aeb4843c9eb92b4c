//! Reading and inspecting parsed configuration documents.
//!
//! Responsibilities:
//! - Read a YAML file from disk and parse it into a `serde_yaml::Value`.
//! - Wrap a validated value in `ConfigDocument` for registries to consume.
//!
//! Does NOT handle:
//! - Policy checks (see `validate::content`).
//!
//! Invariants:
//! - Custom tags (`!tagged_iterator`, `!php/const`, ...) parse as
//!   `Value::Tagged` and are carried through uninterpreted.
//! - An empty or whitespace-only file parses as `Value::Null`.
//! - Merge keys (`<<: *anchor`) are expanded before any caller sees the value.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::constants::{PARAMETERS_KEY, RESERVED_ENTRIES, RESERVED_PREFIX, SERVICES_KEY};
use crate::error::LoaderError;

/// Reads and parses the YAML file at `path`.
pub fn read_document(path: &Path) -> Result<Value, LoaderError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoaderError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_document(path, &content)
}

/// Parses YAML `content`; `path` is only used for error context.
pub fn parse_document(path: &Path, content: &str) -> Result<Value, LoaderError> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }

    let to_parse_error = |e: serde_yaml::Error| LoaderError::Parse {
        path: path.to_path_buf(),
        source: e,
    };

    let mut value: Value = serde_yaml::from_str(content).map_err(to_parse_error)?;
    value.apply_merge().map_err(to_parse_error)?;
    Ok(value)
}

/// Renders a mapping key for error messages.
pub(crate) fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}

/// A configuration document that passed content validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    source: PathBuf,
    content: Value,
}

impl ConfigDocument {
    pub(crate) fn new(source: PathBuf, content: Value) -> Self {
        Self { source, content }
    }

    /// Path of the file this document was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn services(&self) -> Option<&Mapping> {
        self.content.get(SERVICES_KEY).and_then(Value::as_mapping)
    }

    /// Service definitions, skipping reserved entries such as `_defaults`
    /// and `_instanceof`.
    ///
    /// Non-string identifiers and unknown `_`-prefixed identifiers are not
    /// valid service ids; they are skipped with a warning.
    pub fn service_definitions(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.services()
            .into_iter()
            .flat_map(|services| services.iter())
            .filter_map(move |(key, value)| {
                let Some(id) = key.as_str() else {
                    tracing::warn!(
                        source = %self.source.display(),
                        key = %key_label(key),
                        "Skipping service entry with a non-string identifier"
                    );
                    return None;
                };
                if !id.starts_with(RESERVED_PREFIX) {
                    return Some((id, value));
                }
                if !RESERVED_ENTRIES.contains(&id) {
                    tracing::warn!(
                        source = %self.source.display(),
                        service = id,
                        "Skipping service entry with a reserved `_` prefix"
                    );
                }
                None
            })
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.content
            .get(PARAMETERS_KEY)
            .and_then(Value::as_mapping)
            .into_iter()
            .flat_map(|parameters| parameters.iter())
            .filter_map(|(key, value)| key.as_str().map(|name| (name, value)))
    }
}
