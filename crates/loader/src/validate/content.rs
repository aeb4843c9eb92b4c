//! Document shape and directive validation.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::constants::{DEFAULTS_KEY, EXCLUDE_KEY, SERVICES_KEY};
use crate::document::key_label;
use crate::error::LoaderError;

/// Enforces the required shape of a single configuration document.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentValidator;

impl ContentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Runs the shape, defaults, and banned-directive checks in order.
    ///
    /// `source` is only used for error context.
    pub fn validate(&self, document: &Value, source: &Path) -> Result<(), LoaderError> {
        let services = Self::services_mapping(document, source)?;
        Self::check_defaults(services, source)?;
        Self::check_exclude(services, source)
    }

    fn services_mapping<'a>(document: &'a Value, source: &Path) -> Result<&'a Value, LoaderError> {
        document
            .as_mapping()
            .and_then(|root| root.get(SERVICES_KEY))
            .filter(|services| services.is_mapping())
            .ok_or_else(|| LoaderError::MalformedDocument {
                path: source.to_path_buf(),
            })
    }

    fn check_defaults(services: &Value, source: &Path) -> Result<(), LoaderError> {
        match services.as_mapping() {
            Some(services) if services.contains_key(DEFAULTS_KEY) => Ok(()),
            _ => Err(LoaderError::MissingDefaults {
                path: source.to_path_buf(),
            }),
        }
    }

    /// Scalar and sequence entries are not inspected; only mapping-valued
    /// definitions can carry `exclude`.
    fn check_exclude(services: &Value, source: &Path) -> Result<(), LoaderError> {
        let Some(services) = services.as_mapping() else {
            return Ok(());
        };

        match Self::first_excluding_service(services) {
            Some(id) => Err(LoaderError::ExcludeDirectiveForbidden {
                path: source.to_path_buf(),
                service: key_label(id),
            }),
            None => Ok(()),
        }
    }

    fn first_excluding_service(services: &Mapping) -> Option<&Value> {
        services
            .iter()
            .find(|(_, definition)| {
                definition
                    .as_mapping()
                    .is_some_and(|definition| definition.contains_key(EXCLUDE_KEY))
            })
            .map(|(id, _)| id)
    }
}
