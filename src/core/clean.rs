//! Clean logic
//!
//! This module contains the business logic for cleaning build artifacts.
//! It removes the build output directory.

use std::path::Path;

use crate::config::defaults::BUILD_DIR;
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Directories to remove during clean
pub const CLEAN_DIRECTORIES: &[&str] = &[BUILD_DIR];

/// Result of clean operation
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Directories that were removed
    pub removed: Vec<String>,
    /// Directories that didn't exist (skipped)
    pub skipped: Vec<String>,
}

/// Clean build artifacts from a project
///
/// Removes the build/ directory if it exists.
pub fn clean_project(project_path: &Path) -> Result<CleanResult, FilesystemError> {
    let mut result = CleanResult::default();

    for dir_name in CLEAN_DIRECTORIES {
        let dir_path = project_path.join(dir_name);

        if dir_path.exists() {
            filesystem::remove_dir_all(&dir_path)?;
            result.removed.push((*dir_name).to_string());
        } else {
            result.skipped.push((*dir_name).to_string());
        }
    }

    Ok(result)
}

/// Check if a project has any build artifacts
pub fn has_build_artifacts(project_path: &Path) -> bool {
    CLEAN_DIRECTORIES
        .iter()
        .any(|dir| project_path.join(dir).exists())
}
