//! Error types for extmod
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Descriptor loading and validation errors
///
/// Every variant is terminal for the affected descriptor. A failure in one
/// descriptor must not abort processing of unrelated descriptors.
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// Failed to read the descriptor file
    #[error("Failed to read descriptor '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Invalid TOML syntax
    #[error("Malformed descriptor '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Missing required field
    #[error("Malformed descriptor '{path}': missing required field '{field}'")]
    MissingField { path: PathBuf, field: String },

    /// Sources list is empty
    #[error("Malformed descriptor '{path}': 'sources' must not be empty")]
    EmptySources { path: PathBuf },

    /// Module name is not a valid identifier
    #[error("Malformed descriptor '{path}': module name '{name}' is not a valid identifier")]
    InvalidName { path: PathBuf, name: String },

    /// Listed source file does not exist
    #[error("Source file not found for module '{module}': {source_path}")]
    SourceNotFound {
        module: String,
        source_path: PathBuf,
    },

    /// Two descriptors in one invocation declare the same module name
    #[error("Duplicate module name '{name}': declared by both '{first}' and '{second}'")]
    DuplicateName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Toolchain invocation errors
#[derive(Error, Debug)]
pub enum ToolchainError {
    /// Compiler binary not found
    #[error("Compiler '{compiler}' not found in PATH. Install a C toolchain or set $CC")]
    CompilerNotFound { compiler: String },

    /// Compiler or linker exited with nonzero status
    ///
    /// The captured diagnostic log is surfaced verbatim to the invoker.
    #[error("Toolchain failed for module '{module}':\n{log}")]
    Failure { module: String, log: String },

    /// Failed to spawn or wait for the toolchain process
    #[error("Failed to run toolchain for module '{module}': {error}")]
    Spawn { module: String, error: String },

    /// IO error around the invocation (artifact handling)
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to remove file
    #[error("Failed to remove file '{path}': {error}")]
    RemoveFile { path: PathBuf, error: String },
}

/// Scaffolding errors for `extmod init`
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Descriptor already exists at the target location
    #[error("Descriptor already exists at '{path}'. Use --force to overwrite")]
    AlreadyExists { path: PathBuf },

    /// Invalid module name for scaffolding
    #[error("'{name}' is not a valid module name (expected a C identifier)")]
    InvalidName { name: String },

    /// IO error during scaffolding
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Top-level extmod error type
#[derive(Error, Debug)]
pub enum ExtmodError {
    /// Descriptor error
    #[error("Descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),

    /// Toolchain error
    #[error("Toolchain error: {0}")]
    Toolchain(#[from] ToolchainError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Scaffold error
    #[error("Scaffold error: {0}")]
    Scaffold(#[from] ScaffoldError),

}
