//! Check command logic
//!
//! Validates every discovered descriptor, verifies the toolchain is
//! available, and reports what would be built without actually building.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::descriptor::{self, ModuleDescriptor};
use crate::infra::toolchain::CcToolchain;

/// Summary of one valid descriptor
#[derive(Debug, Clone, Serialize)]
pub struct ModuleSummary {
    /// Module name
    pub name: String,
    /// Module version
    pub version: String,
    /// Descriptor file path
    pub path: PathBuf,
    /// Declared source files
    pub sources: Vec<PathBuf>,
    /// Optional description
    pub description: Option<String>,
}

impl From<&ModuleDescriptor> for ModuleSummary {
    fn from(descriptor: &ModuleDescriptor) -> Self {
        Self {
            name: descriptor.name.clone(),
            version: descriptor.version.clone(),
            path: descriptor.path().to_path_buf(),
            sources: descriptor.sources.clone(),
            description: descriptor.description.clone(),
        }
    }
}

/// One descriptor that failed to load
#[derive(Debug, Serialize)]
pub struct DescriptorFailure {
    /// Descriptor file path
    pub path: PathBuf,
    /// Why loading failed
    pub error: String,
}

/// Result of the check operation
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether a C toolchain can be resolved
    pub toolchain_available: bool,
    /// Modules that would be built
    pub modules: Vec<ModuleSummary>,
    /// Descriptors that failed validation
    pub failures: Vec<DescriptorFailure>,
    /// Warnings encountered during check
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Check if all descriptors validated
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Perform check operation on a project tree
///
/// Loads every descriptor under `project_dir`, collecting per-descriptor
/// failures instead of aborting on the first one. Creates nothing and
/// modifies nothing.
pub fn check(project_dir: &Path) -> CheckReport {
    let mut report = CheckReport {
        toolchain_available: CcToolchain::is_available(),
        modules: Vec::new(),
        failures: Vec::new(),
        warnings: Vec::new(),
    };

    let mut loaded = Vec::new();
    for path in descriptor::discover(project_dir) {
        match ModuleDescriptor::load(&path) {
            Ok(descriptor) => {
                if semver::Version::parse(&descriptor.version).is_err() {
                    report.warnings.push(format!(
                        "Module '{}' has non-semver version '{}'",
                        descriptor.name, descriptor.version
                    ));
                }
                loaded.push(descriptor);
            }
            Err(e) => report.failures.push(DescriptorFailure {
                path,
                error: e.to_string(),
            }),
        }
    }

    if let Err(e) = descriptor::check_unique_names(&loaded) {
        report.failures.push(DescriptorFailure {
            path: project_dir.to_path_buf(),
            error: e.to_string(),
        });
    }

    if !report.toolchain_available {
        report
            .warnings
            .push("C compiler not found in PATH (set $CC or install a toolchain)".to_string());
    }

    report.modules = loaded.iter().map(ModuleSummary::from).collect();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_module(root: &Path, dir_name: &str, name: &str, version: &str) {
        let dir = root.join(dir_name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{name}.c")), "/* stub */\n").unwrap();
        std::fs::write(
            dir.join("module.toml"),
            format!("[module]\nname = \"{name}\"\nversion = \"{version}\"\nsources = [\"{name}.c\"]\n"),
        )
        .unwrap();
    }

    #[test]
    fn test_check_empty_project() {
        let temp = TempDir::new().unwrap();

        let report = check(temp.path());

        assert!(report.is_valid());
        assert!(report.modules.is_empty());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_check_collects_valid_modules() {
        let temp = TempDir::new().unwrap();
        create_module(temp.path(), "intro", "spam", "0.1.0");
        create_module(temp.path(), "realpython", "fputs", "0.1.0");

        let report = check(temp.path());

        assert!(report.is_valid());
        let mut names: Vec<&str> = report.modules.iter().map(|m| m.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["fputs", "spam"]);
    }

    #[test]
    fn test_check_one_bad_descriptor_does_not_hide_others() {
        let temp = TempDir::new().unwrap();
        create_module(temp.path(), "good", "spam", "0.1.0");
        let bad_dir = temp.path().join("bad");
        std::fs::create_dir_all(&bad_dir).unwrap();
        std::fs::write(bad_dir.join("module.toml"), "[module]\nsources = [\"x.c\"]\n").unwrap();

        let report = check(temp.path());

        assert!(!report.is_valid());
        assert_eq!(report.modules.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].error.contains("module.name"));
    }

    #[test]
    fn test_check_flags_duplicate_names() {
        let temp = TempDir::new().unwrap();
        create_module(temp.path(), "a", "spam", "0.1.0");
        create_module(temp.path(), "b", "spam", "0.1.0");

        let report = check(temp.path());

        assert!(!report.is_valid());
        assert!(report
            .failures
            .iter()
            .any(|f| f.error.contains("Duplicate module name")));
    }

    #[test]
    fn test_check_warns_on_non_semver_version() {
        let temp = TempDir::new().unwrap();
        create_module(temp.path(), "intro", "spam", "snapshot");

        let report = check(temp.path());

        assert!(report.is_valid());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("non-semver version 'snapshot'")));
    }
}
