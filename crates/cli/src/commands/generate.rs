//! modelsync generate command

use clap::Args;
use codegen::{GenerateOptions, GenerateReport, ModelGenerator};
use console::style;
use std::path::PathBuf;

use super::DEFAULT_MODELS_DIR;

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// OpenAPI specification file (YAML or JSON)
    #[arg(long, default_value = loader::DEFAULT_SPEC_PATH)]
    pub spec: PathBuf,

    /// Output directory for generated artifacts
    #[arg(long, default_value = DEFAULT_MODELS_DIR)]
    pub out: PathBuf,

    /// Overwrite existing artifacts
    #[arg(long)]
    pub force: bool,

    /// Show what would be generated without writing files
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let document = loader::load(&self.spec)?;

        if document.is_empty() {
            println!(
                "{} No schemas found in {}",
                style("!").yellow(),
                self.spec.display()
            );
            return Ok(());
        }

        let mut options = GenerateOptions::new(&self.out);
        options.force = self.force;
        options.dry_run = self.dry_run;

        let generator = ModelGenerator::new(options);
        let report = generator.generate(&document)?;

        print_report(&report, self.dry_run);
        Ok(())
    }
}

pub(crate) fn print_report(report: &GenerateReport, dry_run: bool) {
    for model in &report.generated {
        if dry_run {
            println!("{} Would generate {}", style("→").cyan(), model.name);
            if let Some(preview) = &model.preview {
                for line in preview.lines().take(6) {
                    println!("    {line}");
                }
                println!("    ...");
            }
        } else if model.overwritten {
            println!("{} Regenerated {}", style("✓").green(), model.name);
        } else {
            println!("{} Generated {}", style("✓").green(), model.name);
        }
    }

    for skipped in &report.skipped {
        println!(
            "{} Skipped {} ({})",
            style("-").dim(),
            skipped.name,
            skipped.reason.as_str()
        );
    }

    println!(
        "\n{} generated, {} skipped",
        report.generated.len(),
        report.skipped.len()
    );
}
