//! ModelGenerator - derive and emit model artifacts

use crate::render::render_source;
use crate::report::{GenerateReport, GeneratedModel, SkipReason, SkippedModel};
use crate::rules::validation_rule;
use indexmap::IndexMap;
use shared::{
    is_excluded_schema, model_name, ModelDescriptor, Result, SchemaDefinition, SchemaDocument,
};
use std::path::PathBuf;

/// Options for one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory receiving the generated sources and descriptors
    pub out_dir: PathBuf,

    /// Overwrite existing artifacts
    pub force: bool,

    /// Record rendered content without writing anything
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            force: false,
            dry_run: false,
        }
    }
}

/// Model generator
#[derive(Debug)]
pub struct ModelGenerator {
    options: GenerateOptions,
}

impl ModelGenerator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Process every schema of the document, in encounter order.
    pub fn generate(&self, document: &SchemaDocument) -> Result<GenerateReport> {
        let mut report = GenerateReport::default();

        for (schema_name, definition) in &document.schemas {
            self.process_schema(schema_name, definition, &mut report)?;
        }

        Ok(report)
    }

    fn process_schema(
        &self,
        schema_name: &str,
        definition: &SchemaDefinition,
        report: &mut GenerateReport,
    ) -> Result<()> {
        if is_excluded_schema(schema_name) {
            report.skipped.push(SkippedModel {
                name: schema_name.to_string(),
                reason: SkipReason::ExcludedName,
            });
            return Ok(());
        }

        let name = model_name(schema_name);
        let source_path = self.options.out_dir.join(format!("{name}.rs"));
        let exists = source_path.exists();

        if exists && !self.options.force {
            report.skipped.push(SkippedModel {
                name,
                reason: SkipReason::AlreadyExists,
            });
            return Ok(());
        }

        let descriptor = build_descriptor(&name, definition);
        let source = render_source(definition, &descriptor);

        if self.options.dry_run {
            report.generated.push(GeneratedModel {
                name,
                path: source_path,
                written: false,
                overwritten: false,
                preview: Some(source),
            });
            return Ok(());
        }

        std::fs::create_dir_all(&self.options.out_dir)?;
        std::fs::write(&source_path, source)?;

        let descriptor_path = self.options.out_dir.join(format!("{name}.json"));
        let descriptor_json = serde_json::to_string_pretty(&descriptor)?;
        std::fs::write(&descriptor_path, descriptor_json + "\n")?;

        tracing::debug!(model = %name, path = %source_path.display(), "generated model artifact");

        report.generated.push(GeneratedModel {
            name,
            path: source_path,
            written: true,
            overwritten: exists,
            preview: None,
        });

        Ok(())
    }
}

/// Derive the fillable list, casts and validation rules for one schema.
///
/// Every property gets a rule entry, even when the rule string is empty
/// (object-typed optional properties), so the verifier can rely on the
/// entry existing.
pub fn build_descriptor(name: &str, definition: &SchemaDefinition) -> ModelDescriptor {
    let mut fillable = Vec::new();
    let mut casts = IndexMap::new();
    let mut validation_rules = IndexMap::new();

    for (field, property) in &definition.properties {
        fillable.push(field.clone());

        if let Some(cast) = property.cast_kind() {
            casts.insert(field.clone(), cast);
        }

        validation_rules.insert(
            field.clone(),
            validation_rule(property, definition.is_required(field)),
        );
    }

    ModelDescriptor {
        name: name.to_string(),
        fillable,
        casts,
        validation_rules,
    }
}
