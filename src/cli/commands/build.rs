//! Build command implementation
//!
//! Implements `extmod build` to compile discovered module descriptors into
//! loadable artifacts. Distinct modules build concurrently; a failure in one
//! module never aborts the others.

use anyhow::{bail, Context, Result};
use futures::StreamExt;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::output::{self, status, OutputConfig};
use crate::config::defaults::BUILD_DIR;
use crate::core::build::{build_module, BuildOutcome};
use crate::core::descriptor::{self, ModuleDescriptor};
use crate::error::ToolchainError;
use crate::infra::filesystem;
use crate::infra::toolchain::{CcToolchain, Toolchain};

/// Build options
pub struct BuildOptions {
    /// Build only the named module
    pub module: Option<String>,
    /// Number of parallel module builds
    pub jobs: Option<usize>,
    /// Artifact output directory
    pub out_dir: Option<PathBuf>,
}

/// Execute the build command
pub async fn execute(project_dir: &Path, options: BuildOptions) -> Result<()> {
    let descriptor_paths = descriptor::discover(project_dir);
    if descriptor_paths.is_empty() {
        bail!(
            "No module.toml found under '{}'. Run 'extmod init <name>' to create one.",
            project_dir.display()
        );
    }

    // Load descriptors, recording per-descriptor failures without aborting.
    let mut loaded: Vec<ModuleDescriptor> = Vec::new();
    let mut outcomes: Vec<BuildOutcome> = Vec::new();
    for path in descriptor_paths {
        match ModuleDescriptor::load(&path) {
            Ok(descriptor) => loaded.push(descriptor),
            Err(e) => outcomes.push(BuildOutcome::failure(
                path.display().to_string(),
                e.to_string(),
            )),
        }
    }

    // Restrict to the requested module, if any. A descriptor declaring the
    // module may have failed to load above; surface those failures instead of
    // masking the cause behind a bare not-found error.
    if let Some(ref module) = options.module {
        loaded.retain(|d| &d.name == module);
        if loaded.is_empty() {
            if !outcomes.is_empty() {
                outcomes.sort_by(|a, b| a.module.cmp(&b.module));
                report(&outcomes)?;
            }
            bail!("Module '{module}' not found in any descriptor");
        }
    }

    // Artifact names derive from module names; duplicates would race for the
    // same output file, so every descriptor carrying a duplicated name fails.
    let mut name_counts: HashMap<String, usize> = HashMap::new();
    for descriptor in &loaded {
        *name_counts.entry(descriptor.name.clone()).or_default() += 1;
    }
    let (to_build, duplicates): (Vec<_>, Vec<_>) = loaded
        .into_iter()
        .partition(|d| name_counts[&d.name] == 1);
    for descriptor in duplicates {
        outcomes.push(BuildOutcome::failure(
            descriptor.name.clone(),
            format!(
                "Duplicate module name '{}' declared by '{}'",
                descriptor.name,
                descriptor.path().display()
            ),
        ));
    }

    let toolchain = Arc::new(
        CcToolchain::locate().context("Cannot build without a C toolchain")?,
    );

    let out_dir = match options.out_dir {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => project_dir.join(dir),
        None => project_dir.join(BUILD_DIR),
    };
    filesystem::create_dir_all(&out_dir)?;
    let out_dir = Arc::new(out_dir);

    let jobs = options.jobs.unwrap_or_else(num_cpus::get).max(1);
    tracing::info!(
        "Building {} modules with {} jobs using {}",
        to_build.len(),
        jobs,
        toolchain.describe()
    );

    let progress = output::create_build_bar(to_build.len() as u64);
    let mut builds = futures::stream::iter(to_build.into_iter().map(|descriptor| {
        let toolchain = Arc::clone(&toolchain);
        let out_dir = Arc::clone(&out_dir);
        async move {
            tokio::task::spawn_blocking(move || {
                let module = descriptor.name.clone();
                match build_module(&descriptor, toolchain.as_ref(), &out_dir) {
                    Ok(outcome) => outcome,
                    Err(ToolchainError::Failure { module, log }) => {
                        BuildOutcome::failure(module, log)
                    }
                    Err(other) => BuildOutcome::failure(module, other.to_string()),
                }
            })
            .await
        }
    }))
    .buffer_unordered(jobs);

    while let Some(joined) = builds.next().await {
        let outcome = joined.context("Build task failed")?;
        progress.inc(1);
        progress.set_message(outcome.module.clone());
        outcomes.push(outcome);
    }
    progress.finish_and_clear();

    outcomes.sort_by(|a, b| a.module.cmp(&b.module));
    report(&outcomes)?;

    let failed = outcomes.iter().filter(|o| !o.success).count();
    if failed > 0 {
        bail!("{failed} of {} modules failed to build", outcomes.len());
    }
    Ok(())
}

/// Display per-module outcomes and the build summary
fn report(outcomes: &[BuildOutcome]) -> Result<()> {
    let config = OutputConfig::global();

    if config.json {
        println!("{}", serde_json::to_string_pretty(outcomes)?);
        return Ok(());
    }

    for outcome in outcomes {
        if outcome.success {
            if !config.quiet {
                let artifact = outcome
                    .artifact_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                println!("{} {} -> {artifact}", status::SUCCESS, outcome.module);
            }
        } else {
            eprintln!("{} {} failed:", status::ERROR, outcome.module);
            for line in outcome.log.lines() {
                eprintln!("    {line}");
            }
        }
    }

    let built = outcomes.iter().filter(|o| o.success).count();
    if !config.quiet && built == outcomes.len() {
        println!("{} Build complete! Modules built: {built}", status::SUCCESS);
    }
    Ok(())
}
