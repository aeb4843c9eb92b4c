//! Directory whitelist validation.

use std::path::Path;

use crate::constants::CONFIG_EXTENSIONS;
use crate::environment::allowed_file_names;
use crate::error::LoaderError;

/// Rejects configuration directories containing unexpected YAML files.
#[derive(Debug, Clone)]
pub struct FileSetValidator {
    allowed: Vec<String>,
}

impl Default for FileSetValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSetValidator {
    pub fn new() -> Self {
        Self {
            allowed: allowed_file_names(),
        }
    }

    /// File names this validator accepts.
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    /// Validates every YAML entry directly inside `directory`.
    ///
    /// A missing directory passes; the loader reports the missing base file.
    /// Subdirectories and non-YAML files are ignored.
    pub fn validate(&self, directory: &Path) -> Result<(), LoaderError> {
        if !directory.is_dir() {
            tracing::debug!(
                directory = %directory.display(),
                "Configuration directory missing, skipping file set validation"
            );
            return Ok(());
        }

        let entries = std::fs::read_dir(directory).map_err(|e| LoaderError::DirectoryRead {
            directory: directory.to_path_buf(),
            source: e,
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| LoaderError::DirectoryRead {
                directory: directory.to_path_buf(),
                source: e,
            })?;

            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if !has_config_extension(&name) {
                continue;
            }

            if !self.allowed.iter().any(|allowed| *allowed == name) {
                return Err(LoaderError::DisallowedFile {
                    directory: directory.to_path_buf(),
                    file: name,
                    allowed: self.allowed.join(", "),
                });
            }
        }

        Ok(())
    }
}

/// Case-sensitive match against the recognized extensions.
fn has_config_extension(name: &str) -> bool {
    CONFIG_EXTENSIONS
        .iter()
        .any(|ext| name.strip_suffix(ext).is_some_and(|rest| rest.ends_with('.')))
}
