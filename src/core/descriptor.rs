//! Module descriptor (module.toml) parsing and validation
//!
//! A descriptor is the declarative record naming one loadable module and the
//! source files it is compiled from. It is created once when authored,
//! consumed once per build invocation, and never mutated.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::defaults::{BUILD_DIR, DEFAULT_VERSION, DESCRIPTOR_FILE_NAME};
use crate::error::DescriptorError;

/// On-disk shape of a descriptor file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DescriptorFile {
    /// The single module this descriptor declares
    pub module: ModuleSection,
}

/// The `[module]` table of a descriptor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleSection {
    /// Name of the resulting loadable module
    pub name: String,

    /// Module version (informational only)
    #[serde(default = "default_version")]
    pub version: String,

    /// Source files to compile, relative to the descriptor's directory
    pub sources: Vec<PathBuf>,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Informational classifiers, no effect on build behavior
    #[serde(default)]
    pub classifiers: Vec<String>,
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

/// A validated, immutable module descriptor
///
/// Produced by [`ModuleDescriptor::load`]; all invariants hold: `name` is a
/// valid identifier, `sources` is non-empty, and every source exists on disk
/// at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDescriptor {
    /// Path of the descriptor file this was loaded from
    path: PathBuf,
    /// Name of the resulting loadable module
    pub name: String,
    /// Module version (informational only)
    pub version: String,
    /// Source files, relative to the descriptor's directory
    pub sources: Vec<PathBuf>,
    /// Free-text description
    pub description: Option<String>,
    /// Informational classifiers
    pub classifiers: Vec<String>,
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"))
}

/// Check whether a string is usable as a loadable module name
pub fn is_valid_module_name(name: &str) -> bool {
    name_pattern().is_match(name)
}

impl ModuleDescriptor {
    /// Load and validate a descriptor from a file path
    ///
    /// Pure parse plus filesystem existence check; no other side effects.
    pub fn load(path: &Path) -> Result<Self, DescriptorError> {
        let content = std::fs::read_to_string(path).map_err(|e| DescriptorError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content, path)
    }

    /// Parse and validate a descriptor from TOML content
    ///
    /// `path` is the location the content was (or would be) read from; source
    /// paths resolve relative to its parent directory.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, DescriptorError> {
        let value: toml::Value = toml::from_str(content).map_err(|e| DescriptorError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Report missing required fields by name before letting serde loose
        // on the rest of the structure.
        let module = value
            .get("module")
            .ok_or_else(|| DescriptorError::MissingField {
                path: path.to_path_buf(),
                field: "module".to_string(),
            })?;
        if module.get("name").is_none() {
            return Err(DescriptorError::MissingField {
                path: path.to_path_buf(),
                field: "module.name".to_string(),
            });
        }
        if module.get("sources").is_none() {
            return Err(DescriptorError::MissingField {
                path: path.to_path_buf(),
                field: "module.sources".to_string(),
            });
        }

        let file: DescriptorFile = value.try_into().map_err(|e| DescriptorError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let descriptor = Self {
            path: path.to_path_buf(),
            name: file.module.name,
            version: file.module.version,
            sources: file.module.sources,
            description: file.module.description,
            classifiers: file.module.classifiers,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Validate invariants: name shape, non-empty sources, sources exist
    fn validate(&self) -> Result<(), DescriptorError> {
        if !is_valid_module_name(&self.name) {
            return Err(DescriptorError::InvalidName {
                path: self.path.clone(),
                name: self.name.clone(),
            });
        }
        if self.sources.is_empty() {
            return Err(DescriptorError::EmptySources {
                path: self.path.clone(),
            });
        }
        for source in &self.sources {
            let resolved = self.dir().join(source);
            if !resolved.is_file() {
                return Err(DescriptorError::SourceNotFound {
                    module: self.name.clone(),
                    source_path: source.clone(),
                });
            }
        }
        Ok(())
    }

    /// Path of the descriptor file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the descriptor lives in; source paths resolve against it
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Source paths resolved against the descriptor directory
    pub fn resolved_sources(&self) -> Vec<PathBuf> {
        self.sources.iter().map(|s| self.dir().join(s)).collect()
    }

    /// File name of the artifact this descriptor produces
    pub fn artifact_file_name(&self) -> String {
        format!("{}.{}", self.name, crate::infra::toolchain::loadable_extension())
    }
}

/// Discover descriptor files under a project root
///
/// Walks the tree for files named `module.toml`, skipping the build output
/// directory and hidden directories. Results are sorted for deterministic
/// processing order.
pub fn discover(root: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            // The walk root is always entered, whatever its name.
            if entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !(entry.file_type().is_dir() && (name == BUILD_DIR || name.starts_with('.')))
        })
        .filter_map(Result::ok)
        .filter(|entry| {
            entry.file_type().is_file() && entry.file_name() == DESCRIPTOR_FILE_NAME
        })
        .map(|entry| entry.into_path())
        .collect();
    found.sort();
    found
}

/// Verify module names are unique within one invocation
///
/// Artifact names derive from module names, so a duplicate would make two
/// descriptors race for the same output file.
pub fn check_unique_names(descriptors: &[ModuleDescriptor]) -> Result<(), DescriptorError> {
    let mut seen: std::collections::HashMap<&str, &Path> = std::collections::HashMap::new();
    for descriptor in descriptors {
        if let Some(first) = seen.insert(descriptor.name.as_str(), descriptor.path()) {
            return Err(DescriptorError::DuplicateName {
                name: descriptor.name.clone(),
                first: first.to_path_buf(),
                second: descriptor.path().to_path_buf(),
            });
        }
    }
    Ok(())
}
