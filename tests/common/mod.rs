//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the extmod binary in the project directory
#[allow(dead_code)]
pub fn run_extmod(project: &TestProject, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_extmod"));
    cmd.current_dir(project.path());
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute extmod")
}

/// Run the extmod binary with an explicit CC override
#[allow(dead_code)]
pub fn run_extmod_with_cc(project: &TestProject, cc: &std::path::Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_extmod"));
    cmd.current_dir(project.path());
    cmd.env("CC", cc);
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute extmod")
}

/// Create a module directory with a descriptor and stub source
#[allow(dead_code)]
pub fn create_module(project: &TestProject, dir: &str, name: &str) {
    project.create_dir(dir);
    project.create_file(&format!("{dir}/{name}.c"), "/* stub */\n");
    project.create_file(
        &format!("{dir}/module.toml"),
        &format!("[module]\nname = \"{name}\"\nversion = \"0.1.0\"\nsources = [\"{name}.c\"]\n"),
    );
}

/// Write an executable stub compiler that concatenates its inputs
///
/// Understands the `-shared -fPIC -o <out> <sources...>` invocation shape and
/// produces a deterministic artifact, so build tests do not need a real C
/// toolchain.
#[allow(dead_code)]
#[cfg(unix)]
pub fn write_stub_compiler(project: &TestProject) -> PathBuf {
    write_compiler_script(
        project,
        "stub-cc",
        "#!/bin/sh\nshift 3\nout=\"$1\"\nshift\ncat \"$@\" > \"$out\"\n",
    )
}

/// Write an executable stub compiler that always fails with a diagnostic
#[allow(dead_code)]
#[cfg(unix)]
pub fn write_failing_compiler(project: &TestProject) -> PathBuf {
    write_compiler_script(
        project,
        "failing-cc",
        "#!/bin/sh\necho 'error: expected expression before return' >&2\nexit 1\n",
    )
}

#[allow(dead_code)]
#[cfg(unix)]
fn write_compiler_script(project: &TestProject, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = project.path().join(name);
    std::fs::write(&path, body).expect("Failed to write compiler script");
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

/// Sample descriptor TOML for testing
#[allow(dead_code)]
pub const SAMPLE_DESCRIPTOR: &str = r#"
[module]
name = "spam"
version = "0.1.0"
sources = ["spam.c"]
description = "Interface for the fputs C library function"
classifiers = ["Development Status :: 3 - Alpha", "Programming Language :: C"]
"#;
