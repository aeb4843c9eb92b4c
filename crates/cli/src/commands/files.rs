//! File set validation of a configuration directory.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use service_loader::FileSetValidator;

use super::print_json;
use crate::args::OutputFormat;

#[derive(Serialize)]
struct FilesOutput<'a> {
    directory: &'a Path,
    valid: bool,
    allowed: &'a [String],
}

pub fn run(directory: &Path, output: OutputFormat) -> Result<()> {
    let validator = FileSetValidator::new();
    validator.validate(directory)?;

    match output {
        OutputFormat::Json => print_json(&FilesOutput {
            directory,
            valid: true,
            allowed: validator.allowed(),
        }),
        OutputFormat::Text => {
            println!("OK: {} contains only allowed files", directory.display());
            Ok(())
        }
    }
}
