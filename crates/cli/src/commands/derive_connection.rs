//! Derivation of an additional DBAL connection from doctrine configs.

use std::path::Path;

use anyhow::{Context, Result};
use serde_yaml::Value;
use service_loader::{connection_override, read_document};

use super::print_json;
use crate::args::OutputFormat;

pub fn run(file: &Path, name: &str, output: OutputFormat) -> Result<()> {
    let configs = match read_document(file)? {
        Value::Sequence(configs) => configs,
        single => vec![single],
    };

    let document = connection_override(&configs, name)
        .with_context(|| format!("Failed to derive connection \"{name}\" from {}", file.display()))?;

    match output {
        OutputFormat::Json => print_json(&document),
        OutputFormat::Text => {
            let yaml = serde_yaml::to_string(&document).context("Failed to render YAML")?;
            print!("{yaml}");
            Ok(())
        }
    }
}
