//! Content validation of a single configuration file.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use service_loader::{ContentValidator, read_document};

use super::print_json;
use crate::args::OutputFormat;

#[derive(Serialize)]
struct ValidateOutput<'a> {
    file: &'a Path,
    valid: bool,
}

pub fn run(file: &Path, output: OutputFormat) -> Result<()> {
    let document = read_document(file)?;
    ContentValidator::new().validate(&document, file)?;

    match output {
        OutputFormat::Json => print_json(&ValidateOutput { file, valid: true }),
        OutputFormat::Text => {
            println!("OK: {}", file.display());
            Ok(())
        }
    }
}
