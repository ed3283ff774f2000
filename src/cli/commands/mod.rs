//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;
pub mod clean;
pub mod init;
pub mod list;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a module descriptor in the current directory
    Init {
        /// Module name (must be a valid C identifier)
        name: String,

        /// Overwrite an existing descriptor
        #[arg(short, long)]
        force: bool,
    },

    /// Build discovered modules into loadable artifacts
    Build {
        /// Build only the named module
        #[arg(short, long)]
        module: Option<String>,

        /// Number of parallel module builds
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Directory to place artifacts in (default: build/)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Validate descriptors and toolchain without building
    Check,

    /// List discovered module descriptors
    List,

    /// Remove build artifacts
    Clean,
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Init { name, force } => {
                let current_dir = std::env::current_dir()?;
                init::execute(&current_dir, &name, force).await
            }
            Self::Build {
                module,
                jobs,
                out_dir,
            } => {
                let current_dir = std::env::current_dir()?;
                let options = build::BuildOptions {
                    module,
                    jobs,
                    out_dir,
                };
                build::execute(&current_dir, options).await
            }
            Self::Check => {
                let current_dir = std::env::current_dir()?;
                check::execute(&current_dir).await
            }
            Self::List => {
                let current_dir = std::env::current_dir()?;
                list::execute(&current_dir).await
            }
            Self::Clean => {
                let current_dir = std::env::current_dir()?;
                clean::execute(&current_dir).await
            }
        }
    }
}
