//! Full load of a configuration directory into an in-memory registry.

use anyhow::{Context, Result};
use serde::Serialize;
use service_loader::{InMemoryRegistry, LoadOutcome, LoadReport, ResolvedSettings};

use super::print_json;
use crate::args::OutputFormat;

#[derive(Serialize)]
struct CheckOutput<'a> {
    report: &'a LoadReport,
    services: Vec<&'a str>,
}

pub fn run(settings: &ResolvedSettings, output: OutputFormat) -> Result<()> {
    let mut registry = InMemoryRegistry::new();
    let report = settings.load_into(&mut registry).with_context(|| {
        format!(
            "Failed to load service configuration from {}",
            settings.config_dir.display()
        )
    })?;

    match output {
        OutputFormat::Json => print_json(&CheckOutput {
            report: &report,
            services: registry.ids().collect(),
        }),
        OutputFormat::Text => {
            println!(
                "Loaded {} file(s) for environment \"{}\":",
                report.files.len(),
                report.environment
            );
            for file in &report.files {
                println!("  {:<14} {}", file.stage.to_string(), file.path.display());
            }
            if report.outcome == LoadOutcome::NoOverride {
                println!("  (no override file)");
            }
            println!("Services ({}):", registry.len());
            for id in registry.ids() {
                println!("  {id}");
            }
            Ok(())
        }
    }
}
