//! Toolchain invocation
//!
//! Wraps the external native compiler/linker consumed, not reimplemented, by
//! extmod. Given a set of sources and a module name, the toolchain produces a
//! single loadable artifact or fails with a diagnostic log.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::defaults::DEFAULT_COMPILER;
use crate::error::ToolchainError;

/// Platform extension for loadable modules
pub fn loadable_extension() -> &'static str {
    if cfg!(target_os = "macos") {
        "dylib"
    } else {
        "so"
    }
}

/// One compile-and-link request for a single module
#[derive(Debug, Clone)]
pub struct ToolchainRequest {
    /// Module name, used for error context
    pub module: String,
    /// Absolute source paths to compile
    pub sources: Vec<PathBuf>,
    /// Path the loadable artifact must be written to
    pub artifact: PathBuf,
}

/// Captured output of a successful toolchain invocation
#[derive(Debug, Clone, Default)]
pub struct ToolchainOutput {
    /// Interleaved stdout/stderr of the compiler and linker
    pub log: String,
}

/// A toolchain capable of compiling and linking sources into a loadable module
///
/// The compile/link step is a single blocking external-process invocation with
/// no internal suspension points. Implementations must be stateless per
/// request so that distinct modules can build in any order or in parallel.
pub trait Toolchain: Send + Sync {
    /// Human-readable identification of the toolchain
    fn describe(&self) -> String;

    /// Compile and link the request's sources into its artifact
    fn build_module(&self, request: &ToolchainRequest) -> Result<ToolchainOutput, ToolchainError>;
}

/// System C toolchain wrapper
///
/// Uses `$CC` when set, otherwise `cc` from PATH.
#[derive(Debug, Clone)]
pub struct CcToolchain {
    /// Resolved compiler binary
    compiler: PathBuf,
}

impl CcToolchain {
    /// Create a toolchain wrapper around an explicit compiler binary
    pub fn new(compiler: PathBuf) -> Self {
        Self { compiler }
    }

    /// Resolve the system C compiler
    pub fn locate() -> Result<Self, ToolchainError> {
        let compiler = configured_compiler();
        let resolved =
            which::which(&compiler).map_err(|_| ToolchainError::CompilerNotFound {
                compiler: compiler.clone(),
            })?;
        Ok(Self::new(resolved))
    }

    /// Check whether a system C compiler can be resolved
    pub fn is_available() -> bool {
        which::which(configured_compiler()).is_ok()
    }

    /// Path to the compiler binary
    pub fn compiler(&self) -> &Path {
        &self.compiler
    }
}

/// Compiler command name from `$CC`, falling back to the default
fn configured_compiler() -> String {
    match std::env::var("CC") {
        Ok(cc) if !cc.trim().is_empty() => cc,
        _ => DEFAULT_COMPILER.to_string(),
    }
}

impl Toolchain for CcToolchain {
    fn describe(&self) -> String {
        self.compiler.display().to_string()
    }

    fn build_module(&self, request: &ToolchainRequest) -> Result<ToolchainOutput, ToolchainError> {
        let output = Command::new(&self.compiler)
            .arg("-shared")
            .arg("-fPIC")
            .arg("-o")
            .arg(&request.artifact)
            .args(&request.sources)
            .output()
            .map_err(|e| ToolchainError::Spawn {
                module: request.module.clone(),
                error: e.to_string(),
            })?;

        let mut log = String::from_utf8_lossy(&output.stdout).into_owned();
        log.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(ToolchainOutput { log })
        } else {
            Err(ToolchainError::Failure {
                module: request.module.clone(),
                log,
            })
        }
    }
}
