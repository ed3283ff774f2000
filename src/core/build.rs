//! Build invocation logic
//!
//! Transforms one validated descriptor into a loadable artifact through a
//! toolchain. Single-shot and stateless: the outcome is a pure function of
//! the descriptor and the toolchain state, so distinct modules can build in
//! any order or in parallel.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::core::descriptor::ModuleDescriptor;
use crate::error::ToolchainError;
use crate::infra::filesystem;
use crate::infra::toolchain::{Toolchain, ToolchainRequest};

/// Outcome of building one module
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutcome {
    /// Module name
    pub module: String,
    /// Whether the toolchain produced the artifact
    pub success: bool,
    /// Path of the produced artifact, if any
    pub artifact_path: Option<PathBuf>,
    /// SHA-256 of the artifact contents, if produced
    pub checksum: Option<String>,
    /// Captured toolchain diagnostics
    pub log: String,
}

impl BuildOutcome {
    /// Record a terminal failure for a module
    pub fn failure(module: impl Into<String>, log: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            success: false,
            artifact_path: None,
            checksum: None,
            log: log.into(),
        }
    }
}

/// Compile and link a descriptor's sources into a loadable artifact
///
/// The artifact is named after the module and written to `out_dir`. A nonzero
/// toolchain exit is a terminal failure for this module: the diagnostic log
/// is surfaced verbatim, the invocation is never retried, and an incomplete
/// artifact is removed.
pub fn build_module(
    descriptor: &ModuleDescriptor,
    toolchain: &dyn Toolchain,
    out_dir: &Path,
) -> Result<BuildOutcome, ToolchainError> {
    let artifact = out_dir.join(descriptor.artifact_file_name());
    std::fs::create_dir_all(out_dir).map_err(|e| ToolchainError::Io {
        path: out_dir.to_path_buf(),
        error: e.to_string(),
    })?;

    let request = ToolchainRequest {
        module: descriptor.name.clone(),
        sources: descriptor.resolved_sources(),
        artifact: artifact.clone(),
    };

    tracing::debug!(
        "Invoking {} for module '{}' ({} sources)",
        toolchain.describe(),
        descriptor.name,
        request.sources.len()
    );

    match toolchain.build_module(&request) {
        Ok(output) => {
            let checksum = artifact_checksum(&artifact)?;
            Ok(BuildOutcome {
                module: descriptor.name.clone(),
                success: true,
                artifact_path: Some(artifact),
                checksum: Some(checksum),
                log: output.log,
            })
        }
        Err(err) => {
            // A failed invocation must not leave a partial artifact behind.
            if let Err(remove_err) = filesystem::remove_file(&artifact) {
                tracing::warn!("Incomplete artifact left behind: {remove_err}");
            }
            Err(err)
        }
    }
}

/// SHA-256 digest of an artifact's contents
pub fn artifact_checksum(path: &Path) -> Result<String, ToolchainError> {
    let bytes = std::fs::read(path).map_err(|e| ToolchainError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
