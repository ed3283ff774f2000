//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress bars,
//! formatted messages, and the global output configuration.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::OnceLock;

/// Global output configuration applied from CLI flags
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress all output except errors
    pub quiet: bool,
    /// Emit machine-readable JSON instead of human output
    pub json: bool,
    /// Verbosity level (0 = warnings, 1 = info, 2 = debug)
    pub verbose: u8,
}

static GLOBAL_OUTPUT: OnceLock<OutputConfig> = OnceLock::new();

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Install this configuration as the process-wide default
    pub fn apply_global(self) {
        let _ = GLOBAL_OUTPUT.set(self);
    }

    /// The process-wide configuration (defaults when not applied)
    pub fn global() -> Self {
        GLOBAL_OUTPUT.get().copied().unwrap_or_default()
    }

    /// Whether human-readable progress output is wanted
    pub fn show_progress(self) -> bool {
        !self.quiet && !self.json
    }
}

/// Display an error to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR);
}

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = if OutputConfig::global().show_progress() {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Create a progress bar for build steps
pub fn create_build_bar(total: u64) -> ProgressBar {
    let pb = if OutputConfig::global().show_progress() {
        ProgressBar::new(total)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} modules ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}
