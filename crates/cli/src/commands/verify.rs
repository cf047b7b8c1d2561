//! modelsync verify command

use clap::Args;
use console::style;
use std::path::PathBuf;
use verify::{ArtifactRegistry, VerifyReport};

use super::DEFAULT_MODELS_DIR;

#[derive(Debug, Args)]
pub struct VerifyCommand {
    /// OpenAPI specification file (YAML or JSON)
    #[arg(long, default_value = loader::DEFAULT_SPEC_PATH)]
    pub spec: PathBuf,

    /// Directory holding the generated artifacts
    #[arg(long, default_value = DEFAULT_MODELS_DIR)]
    pub models: PathBuf,
}

impl VerifyCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let document = loader::load(&self.spec)?;
        let registry = ArtifactRegistry::load(&self.models)?;
        let report = verify::verify(&document, &registry);

        print_report(&report);

        if !report.passed() {
            anyhow::bail!("verification failed with {} issue(s)", report.issues.len());
        }
        Ok(())
    }
}

pub(crate) fn print_report(report: &VerifyReport) {
    for issue in &report.issues {
        println!("{} {issue}", style("✗").red());
    }
    for warning in &report.warnings {
        println!("{} {warning}", style("!").yellow());
    }

    // the same suggestion can come from several findings
    let mut seen: Vec<&str> = Vec::new();
    for suggestion in &report.suggestions {
        if !seen.contains(&suggestion.as_str()) {
            seen.push(suggestion);
            println!("{} {suggestion}", style("→").cyan());
        }
    }

    if report.passed() {
        println!(
            "{} Models are in sync ({} warning(s))",
            style("✓").green(),
            report.warnings.len()
        );
    } else {
        println!(
            "\n{} issue(s), {} warning(s)",
            report.issues.len(),
            report.warnings.len()
        );
    }
}
