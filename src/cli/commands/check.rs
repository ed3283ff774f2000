//! Check command implementation
//!
//! Implements `extmod check` to validate descriptors and toolchain
//! availability, reporting what would be built without building anything.

use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::output::{self, status, OutputConfig};
use crate::core::check;

/// Execute the check command
pub async fn execute(project_dir: &Path) -> Result<()> {
    let spinner = output::create_spinner("Validating descriptors...");
    let report = check::check(project_dir);
    spinner.finish_and_clear();
    let config = OutputConfig::global();

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.is_valid() {
            bail!("{} descriptors failed validation", report.failures.len());
        }
        return Ok(());
    }

    if !config.quiet {
        if report.modules.is_empty() {
            println!("{} No module descriptors found", status::INFO);
        } else {
            println!("Would build {} modules:", report.modules.len());
            for module in &report.modules {
                println!(
                    "  {} {} {} ({} sources)",
                    status::SUCCESS,
                    module.name,
                    module.version,
                    module.sources.len()
                );
            }
        }
    }

    for warning in &report.warnings {
        eprintln!("{} {warning}", status::WARNING);
    }

    for failure in &report.failures {
        eprintln!("{} {}: {}", status::ERROR, failure.path.display(), failure.error);
    }

    if !report.is_valid() {
        bail!("{} descriptors failed validation", report.failures.len());
    }

    if !config.quiet {
        println!("{} Configuration valid", status::SUCCESS);
    }
    Ok(())
}
