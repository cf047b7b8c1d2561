//! Generation report types

use std::path::PathBuf;

/// Why a schema produced no new artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Name ends with Input/Request/Response/Error
    ExcludedName,
    /// Target file already present and force not set
    AlreadyExists,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::ExcludedName => "input/response schema",
            SkipReason::AlreadyExists => "already exists",
        }
    }
}

/// One schema that was skipped
#[derive(Debug, Clone)]
pub struct SkippedModel {
    pub name: String,
    pub reason: SkipReason,
}

/// One generated (or previewed) artifact
#[derive(Debug, Clone)]
pub struct GeneratedModel {
    pub name: String,
    pub path: PathBuf,
    /// False in dry-run mode
    pub written: bool,
    /// True when force replaced an existing file
    pub overwritten: bool,
    /// Rendered content, captured in dry-run mode only
    pub preview: Option<String>,
}

/// Ordered record of one generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub generated: Vec<GeneratedModel>,
    pub skipped: Vec<SkippedModel>,
}

impl GenerateReport {
    pub fn generated_names(&self) -> Vec<&str> {
        self.generated.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn skipped_names(&self) -> Vec<&str> {
        self.skipped.iter().map(|m| m.name.as_str()).collect()
    }
}
