//! Convention-enforcing service configuration loader.
//!
//! This crate validates a directory of per-environment service configuration
//! files (`services.yaml`, `services_dev.yaml`, `services_test.yaml`) and merges
//! them into a host-provided [`ServiceRegistry`] in a deterministic order.

pub mod connection;
pub mod constants;
mod document;
mod environment;
mod error;
mod loader;
mod registry;
mod settings;
pub mod validate;

pub use connection::{connection_override, derive_connection_config, find_dbal_config};
pub use document::{ConfigDocument, parse_document, read_document};
pub use environment::{ConfigStage, Environment, allowed_file_names};
pub use error::{LoaderError, MergeError};
pub use loader::{EnvironmentAwareLoader, LoadOutcome, LoadReport, LoadedFile};
pub use registry::{InMemoryRegistry, ServiceRegistry};
pub use settings::{LoaderSettings, ResolvedSettings, env_var_or_none};
pub use validate::{ContentValidator, FileSetValidator};
