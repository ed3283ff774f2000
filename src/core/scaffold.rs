//! Descriptor scaffolding logic
//!
//! Creates a starter `module.toml` and stub C source for a new module.

use std::path::{Path, PathBuf};

use crate::config::defaults::{DEFAULT_VERSION, DESCRIPTOR_FILE_NAME};
use crate::core::descriptor::is_valid_module_name;
use crate::error::ScaffoldError;

/// Result of scaffolding a module
#[derive(Debug)]
pub struct ScaffoldResult {
    /// Path of the written descriptor
    pub descriptor_path: PathBuf,
    /// Path of the stub source file
    pub source_path: PathBuf,
    /// Whether the stub source was created (an existing source is kept)
    pub created_source: bool,
}

/// Scaffold a new module descriptor in `dir`
///
/// Writes `module.toml` and, unless one already exists, a stub `<name>.c`.
/// Refuses to overwrite an existing descriptor unless `force` is set.
pub fn scaffold_module(dir: &Path, name: &str, force: bool) -> Result<ScaffoldResult, ScaffoldError> {
    if !is_valid_module_name(name) {
        return Err(ScaffoldError::InvalidName {
            name: name.to_string(),
        });
    }

    let descriptor_path = dir.join(DESCRIPTOR_FILE_NAME);
    if descriptor_path.exists() && !force {
        return Err(ScaffoldError::AlreadyExists {
            path: descriptor_path,
        });
    }

    let source_name = format!("{name}.c");
    let descriptor = format!(
        r#"[module]
name = "{name}"
version = "{DEFAULT_VERSION}"
sources = ["{source_name}"]
description = ""
classifiers = []
"#
    );
    write(&descriptor_path, &descriptor)?;

    let source_path = dir.join(&source_name);
    let created_source = if source_path.exists() {
        false
    } else {
        let stub = format!(
            r#"/* Sources of the '{name}' loadable module. */

int {name}_placeholder(void)
{{
    return 0;
}}
"#
        );
        write(&source_path, &stub)?;
        true
    };

    Ok(ScaffoldResult {
        descriptor_path,
        source_path,
        created_source,
    })
}

fn write(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    std::fs::write(path, content).map_err(|e| ScaffoldError::IoError {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
