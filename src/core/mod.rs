//! Core business logic module
//!
//! This module contains all business logic for extmod.
//!
//! # Submodules
//!
//! - [`descriptor`] - Module descriptor (module.toml) parsing and validation
//! - [`build`] - Descriptor-to-artifact build invocation
//! - [`check`] - Configuration validation logic
//! - [`clean`] - Clean build artifacts logic
//! - [`scaffold`] - Descriptor scaffolding for new modules

pub mod build;
pub mod check;
pub mod clean;
pub mod descriptor;
pub mod scaffold;
