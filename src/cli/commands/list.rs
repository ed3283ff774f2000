//! List command implementation
//!
//! Implements `extmod list` to show discovered module descriptors.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::{status, OutputConfig};
use crate::core::check::ModuleSummary;
use crate::core::descriptor::{self, ModuleDescriptor};

/// Execute the list command
pub async fn execute(project_dir: &Path) -> Result<()> {
    let mut summaries: Vec<ModuleSummary> = Vec::new();
    let mut failures: Vec<String> = Vec::new();

    for path in descriptor::discover(project_dir) {
        match ModuleDescriptor::load(&path) {
            Ok(descriptor) => summaries.push(ModuleSummary::from(&descriptor)),
            Err(e) => failures.push(e.to_string()),
        }
    }

    let config = OutputConfig::global();
    if config.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() && failures.is_empty() {
        if !config.quiet {
            println!("{} No module descriptors found", status::INFO);
        }
        return Ok(());
    }

    if !config.quiet {
        for module in &summaries {
            let description = module
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(|d| format!(" - {d}"))
                .unwrap_or_default();
            println!(
                "{} {} ({}){description}",
                module.name,
                module.version,
                module.path.display()
            );
        }
    }

    for failure in &failures {
        eprintln!("{} {failure}", status::WARNING);
    }
    Ok(())
}
