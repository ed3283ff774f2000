//! Extmod - declarative build tool for native extension modules
//!
//! This library turns declarative module descriptors (`module.toml`) into
//! compiled loadable artifacts by invoking an external native toolchain.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (descriptor handling, build planning)
//! - [`infra`] - Infrastructure layer (filesystem, external processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
