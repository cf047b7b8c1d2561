//! ModelSync CLI - Keep generated models in sync with an OpenAPI spec
//!
//! Usage:
//!   modelsync generate [--spec <file>] [--out <dir>] [--force] [--dry-run]
//!   modelsync verify [--spec <file>] [--models <dir>]
//!   modelsync refresh [--spec <file>] [--out <dir>] [--backup] [--clean]

use clap::{Parser, Subcommand};
use cli::commands::{GenerateCommand, RefreshCommand, VerifyCommand};

#[derive(Parser)]
#[command(name = "modelsync")]
#[command(about = "ModelSync - OpenAPI-driven model generation and drift detection")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate model artifacts from the OpenAPI spec
    Generate(GenerateCommand),
    /// Verify generated artifacts against the OpenAPI spec
    Verify(VerifyCommand),
    /// Regenerate all artifacts, optionally backing up or cleaning first
    Refresh(RefreshCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(cmd) => cmd.run(),
        Commands::Verify(cmd) => cmd.run(),
        Commands::Refresh(cmd) => cmd.run(),
    }
}
