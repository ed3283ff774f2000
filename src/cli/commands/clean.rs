//! Clean command implementation
//!
//! Implements `extmod clean` to remove build artifacts.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::{status, OutputConfig};
use crate::core::clean;
use crate::error::ExtmodError;

/// Execute the clean command
pub async fn execute(project_dir: &Path) -> Result<()> {
    let result = clean::clean_project(project_dir).map_err(ExtmodError::from)?;

    if !OutputConfig::global().quiet {
        for dir in &result.removed {
            println!("{} Removed {dir}/", status::SUCCESS);
        }
        if result.removed.is_empty() {
            println!("{} Nothing to clean", status::INFO);
        }
    }
    Ok(())
}
