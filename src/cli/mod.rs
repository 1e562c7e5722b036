//! CLI command definitions and handlers

mod generate;
mod init;
mod inspect;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bricklint - brick architecture CLI
///
/// Build maintainable codebases out of small, single-purpose,
/// metadata-backed code units.
#[derive(Parser, Debug)]
#[command(name = "bricklint")]
#[command(
    version,
    about = "Brick architecture CLI - scaffold, generate, validate, and inspect bricks",
    after_help = "\
Examples:
  bricklint init myproject                          Scaffold a brick project
  bricklint generate hash_password --spec specs/hash_password.json
  bricklint validate bricks/auth/hash_password.py   Structural checks only
  bricklint inspect bricks/auth/hash_password.py    Full compliance score
  bricklint inspect brick.py --format json          Machine-readable report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new brick project
    Init {
        /// Name of the project (also the directory to create)
        project_name: String,
    },

    /// Generate a metadata sidecar from a specification file
    Generate {
        /// Name of the brick
        brick_name: String,

        /// Path to the spec file (JSON or TOML)
        #[arg(long)]
        spec: PathBuf,

        /// Output directory
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },

    /// Validate brick structure (size, syntax, docstring, metadata)
    Validate {
        /// Path to the brick file
        brick_file: PathBuf,
    },

    /// Inspect brick security, quality, and contract compliance
    Inspect {
        /// Path to the brick file
        brick_file: PathBuf,

        /// Output format
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

/// Dispatch a parsed command, returning the process exit code
pub fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Init { project_name } => init::run(&project_name),
        Commands::Generate {
            brick_name,
            spec,
            output,
        } => generate::run(&brick_name, &spec, &output),
        Commands::Validate { brick_file } => validate::run(&brick_file),
        Commands::Inspect { brick_file, format } => inspect::run(&brick_file, &format),
    }
}
