//! Init command implementation
//!
//! Implements `extmod init` to scaffold a module descriptor.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::{status, OutputConfig};
use crate::core::scaffold;
use crate::error::ExtmodError;

/// Execute the init command
pub async fn execute(project_dir: &Path, name: &str, force: bool) -> Result<()> {
    let result =
        scaffold::scaffold_module(project_dir, name, force).map_err(ExtmodError::from)?;

    if !OutputConfig::global().quiet {
        println!(
            "{} Created {}",
            status::SUCCESS,
            result.descriptor_path.display()
        );
        if result.created_source {
            println!("{} Created {}", status::SUCCESS, result.source_path.display());
        }
        println!("Run 'extmod build' to compile the module.");
    }
    Ok(())
}
