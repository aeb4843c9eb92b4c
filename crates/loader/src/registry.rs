//! Service registry abstraction and an in-memory implementation.
//!
//! Responsibilities:
//! - Define the `ServiceRegistry` seam the loader merges documents into.
//! - Provide `InMemoryRegistry`, an ordered last-writer-wins registry used by
//!   the CLI and by tests.
//!
//! Does NOT handle:
//! - Validation (documents arrive already validated).
//! - Dependency resolution or instantiation of services.
//!
//! Invariants:
//! - Reserved `services` entries (`_defaults`, `_instanceof`) are never
//!   registered as definitions.
//! - A later merge replaces an earlier definition with the same identifier.

use std::collections::BTreeMap;

use serde_yaml::Value;

use crate::document::ConfigDocument;
use crate::error::MergeError;

/// Host-owned accumulator of service definitions.
///
/// The loader only ever appends; merge semantics for colliding identifiers
/// belong to the implementation.
pub trait ServiceRegistry {
    /// Merges a validated document into the registry.
    fn merge_from(&mut self, document: &ConfigDocument) -> Result<(), MergeError>;

    /// Returns true if a service with `id` is registered.
    fn contains(&self, id: &str) -> bool;
}

impl<R: ServiceRegistry + ?Sized> ServiceRegistry for &mut R {
    fn merge_from(&mut self, document: &ConfigDocument) -> Result<(), MergeError> {
        (**self).merge_from(document)
    }

    fn contains(&self, id: &str) -> bool {
        (**self).contains(id)
    }
}

/// Ordered, in-memory registry with last-writer-wins merges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryRegistry {
    services: BTreeMap<String, Value>,
    parameters: BTreeMap<String, Value>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn definition(&self, id: &str) -> Option<&Value> {
        self.services.get(id)
    }

    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Registered service identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl ServiceRegistry for InMemoryRegistry {
    fn merge_from(&mut self, document: &ConfigDocument) -> Result<(), MergeError> {
        for (id, definition) in document.service_definitions() {
            if self
                .services
                .insert(id.to_string(), definition.clone())
                .is_some()
            {
                tracing::debug!(
                    service = id,
                    source = %document.source().display(),
                    "Service definition overridden"
                );
            }
        }

        for (name, value) in document.parameters() {
            self.parameters.insert(name.to_string(), value.clone());
        }

        Ok(())
    }

    fn contains(&self, id: &str) -> bool {
        self.services.contains_key(id)
    }
}
