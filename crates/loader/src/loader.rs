//! Environment-aware loading of a configuration directory.
//!
//! Responsibilities:
//! - Validate the directory file set, then load the base file, then the
//!   override file selected by the environment.
//! - Validate each document's content before merging it.
//! - Report which files were merged and which final state was reached.
//!
//! Does NOT handle:
//! - Resolving the directory or environment from the process (see `settings`).
//! - Merge semantics (delegated to the `ServiceRegistry`).
//!
//! Invariants / Assumptions:
//! - The base file is mandatory; a missing base file is `ResourceNotFound`.
//! - Override files are optional; a missing override is not an error.
//! - The base file always merges before the override.
//! - Any error aborts the load; documents merged before the error stay merged.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::document::{ConfigDocument, read_document};
use crate::environment::{ConfigStage, Environment};
use crate::error::LoaderError;
use crate::registry::ServiceRegistry;
use crate::validate::{ContentValidator, FileSetValidator};

/// Terminal state of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "stage", rename_all = "snake_case")]
pub enum LoadOutcome {
    OverrideLoaded(ConfigStage),
    NoOverride,
}

/// One file merged into the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedFile {
    pub stage: ConfigStage,
    pub path: PathBuf,
}

/// Summary of a successful load, in merge order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub environment: String,
    pub files: Vec<LoadedFile>,
    pub outcome: LoadOutcome,
}

/// Loads the base and environment override files of a configuration directory.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentAwareLoader {
    file_set: FileSetValidator,
    content: ContentValidator,
}

impl EnvironmentAwareLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `directory` and merges its files into `registry`.
    ///
    /// # Errors
    ///
    /// Returns the first policy violation, I/O failure, or merge failure.
    /// A missing base file yields `LoaderError::ResourceNotFound`.
    pub fn load<R>(
        &self,
        directory: &Path,
        environment: &Environment,
        registry: &mut R,
    ) -> Result<LoadReport, LoaderError>
    where
        R: ServiceRegistry + ?Sized,
    {
        tracing::debug!(
            directory = %directory.display(),
            environment = %environment,
            "Loading service configuration"
        );

        self.file_set.validate(directory)?;
        tracing::debug!(directory = %directory.display(), "Directory validated");

        let mut files = Vec::with_capacity(2);

        let base = resolve_stage(directory, ConfigStage::Base).ok_or_else(|| {
            LoaderError::ResourceNotFound {
                path: ConfigStage::Base.candidates(directory).remove(0),
            }
        })?;
        self.load_file(&base, registry)?;
        files.push(LoadedFile {
            stage: ConfigStage::Base,
            path: base,
        });

        let outcome = match environment.override_stage() {
            Some(stage) => match resolve_stage(directory, stage) {
                Some(path) => {
                    self.load_file(&path, registry)?;
                    files.push(LoadedFile { stage, path });
                    LoadOutcome::OverrideLoaded(stage)
                }
                None => {
                    tracing::debug!(
                        directory = %directory.display(),
                        stage = %stage,
                        "Override file not present"
                    );
                    LoadOutcome::NoOverride
                }
            },
            None => LoadOutcome::NoOverride,
        };

        tracing::info!(
            directory = %directory.display(),
            environment = %environment,
            files = files.len(),
            "Service configuration loaded"
        );

        Ok(LoadReport {
            environment: environment.to_string(),
            files,
            outcome,
        })
    }

    /// Reads, validates, and merges a single file.
    fn load_file<R>(&self, path: &Path, registry: &mut R) -> Result<(), LoaderError>
    where
        R: ServiceRegistry + ?Sized,
    {
        let content = read_document(path)?;
        self.content.validate(&content, path)?;

        let document = ConfigDocument::new(path.to_path_buf(), content);
        registry
            .merge_from(&document)
            .map_err(|source| LoaderError::Merge {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "Merged configuration file");
        Ok(())
    }
}

/// First existing candidate file for `stage`; `.yaml` shadows `.yml`.
fn resolve_stage(directory: &Path, stage: ConfigStage) -> Option<PathBuf> {
    let mut existing = stage
        .candidates(directory)
        .into_iter()
        .filter(|path| path.is_file());

    let chosen = existing.next()?;
    for shadowed in existing {
        tracing::warn!(
            used = %chosen.display(),
            ignored = %shadowed.display(),
            "Both .yaml and .yml variants exist; ignoring the .yml file"
        );
    }
    Some(chosen)
}
