//! modelsync refresh command

use clap::Args;
use codegen::{GenerateOptions, ModelGenerator, GENERATED_MARKER};
use console::style;
use std::path::{Path, PathBuf};
use verify::ArtifactRegistry;

use super::DEFAULT_MODELS_DIR;

#[derive(Debug, Args)]
pub struct RefreshCommand {
    /// OpenAPI specification file (YAML or JSON)
    #[arg(long, default_value = loader::DEFAULT_SPEC_PATH)]
    pub spec: PathBuf,

    /// Directory holding the generated artifacts
    #[arg(long, default_value = DEFAULT_MODELS_DIR)]
    pub out: PathBuf,

    /// Copy the current artifacts aside before regenerating
    #[arg(long)]
    pub backup: bool,

    /// Delete previously generated artifacts before regenerating
    #[arg(long)]
    pub clean: bool,
}

impl RefreshCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        if self.backup && self.out.exists() {
            let backup_dir = backup_models(&self.out)?;
            println!(
                "{} Backed up models to {}",
                style("✓").green(),
                backup_dir.display()
            );
        }

        if self.clean && self.out.exists() {
            let removed = clean_generated(&self.out)?;
            println!("{} Removed {removed} generated artifact(s)", style("✓").green());
        }

        let document = loader::load(&self.spec)?;

        let mut options = GenerateOptions::new(&self.out);
        options.force = true;

        let generator = ModelGenerator::new(options);
        let report = generator.generate(&document)?;
        super::generate::print_report(&report, false);

        let registry = ArtifactRegistry::load(&self.out)?;
        let verify_report = verify::verify(&document, &registry);
        super::verify::print_report(&verify_report);

        if !verify_report.passed() {
            anyhow::bail!(
                "verification failed with {} issue(s)",
                verify_report.issues.len()
            );
        }
        Ok(())
    }
}

/// Copy every file of the models directory into a timestamped sibling.
fn backup_models(dir: &Path) -> anyhow::Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    let backup_dir = dir.with_file_name(format!(
        "{}_backup_{timestamp}",
        dir.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("models")
    ));
    std::fs::create_dir_all(&backup_dir)?;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            std::fs::copy(&path, backup_dir.join(entry.file_name()))?;
        }
    }

    Ok(backup_dir)
}

/// Delete sources carrying the generated marker, along with their descriptors.
///
/// Hand-written files in the same directory are left alone.
fn clean_generated(dir: &Path) -> anyhow::Result<usize> {
    let mut removed = 0;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }

        let content = std::fs::read_to_string(&path)?;
        if !content.contains(GENERATED_MARKER) {
            continue;
        }

        std::fs::remove_file(&path)?;
        removed += 1;

        let descriptor = path.with_extension("json");
        if descriptor.exists() {
            std::fs::remove_file(&descriptor)?;
            removed += 1;
        }
    }

    Ok(removed)
}
