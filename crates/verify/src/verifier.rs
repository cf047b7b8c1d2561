//! SyncVerifier - schema vs. generated-artifact drift detection

use crate::registry::ArtifactRegistry;
use shared::naming::{is_excluded_schema, model_name};
use shared::{ModelDescriptor, SchemaDefinition, SchemaDocument};

/// Columns every persisted model carries regardless of the schema
pub const AUDIT_FIELDS: [&str; 4] = ["id", "created_at", "updated_at", "deleted_at"];

/// Outcome of one verification run.
///
/// Problems accumulate into the three lists; the run itself always completes.
/// Only issues fail the run, warnings and suggestions are advisory.
#[derive(Debug, Default)]
pub struct VerifyReport {
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    fn issue(&mut self, message: impl Into<String>) {
        self.issues.push(message.into());
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    fn suggestion(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }
}

/// Compare every model-producing schema against the generated artifacts.
pub fn verify(document: &SchemaDocument, registry: &ArtifactRegistry) -> VerifyReport {
    let mut report = VerifyReport::default();

    for warning in &registry.load_warnings {
        report.warning(warning.clone());
    }

    let mut expected_models = Vec::new();

    for (schema_name, definition) in &document.schemas {
        if is_excluded_schema(schema_name) {
            continue;
        }

        let name = model_name(schema_name);
        expected_models.push(name.clone());

        let Some(descriptor) = registry.get(&name) else {
            report.issue(format!(
                "Model {name} is defined in schema '{schema_name}' but has not been generated"
            ));
            report.suggestion("Run `modelsync generate` to create missing models".to_string());
            continue;
        };

        check_fillable(&mut report, schema_name, definition, descriptor);
        check_rules(&mut report, schema_name, definition, descriptor);
        check_casts(&mut report, schema_name, definition, descriptor);
    }

    for name in registry.model_names() {
        if !expected_models.iter().any(|expected| expected == name) {
            report.warning(format!(
                "Generated model '{name}' has no corresponding schema"
            ));
            report.suggestion(format!(
                "Remove {name} or add a matching schema to the specification"
            ));
        }
    }

    tracing::debug!(
        issues = report.issues.len(),
        warnings = report.warnings.len(),
        "verification complete"
    );

    report
}

fn check_fillable(
    report: &mut VerifyReport,
    schema_name: &str,
    definition: &SchemaDefinition,
    descriptor: &ModelDescriptor,
) {
    for property_name in definition.property_names() {
        if !descriptor.has_fillable(property_name) {
            report.issue(format!(
                "Property '{property_name}' from schema '{schema_name}' is missing from {} fillable fields",
                descriptor.name
            ));
        }
    }

    for field in &descriptor.fillable {
        if definition.properties.contains_key(field) {
            continue;
        }
        if AUDIT_FIELDS.contains(&field.as_str()) {
            continue;
        }
        report.warning(format!(
            "Fillable field '{field}' on {} does not appear in schema '{schema_name}'",
            descriptor.name
        ));
    }
}

fn check_rules(
    report: &mut VerifyReport,
    schema_name: &str,
    definition: &SchemaDefinition,
    descriptor: &ModelDescriptor,
) {
    for property_name in definition.property_names() {
        if !descriptor.validation_rules.contains_key(property_name) {
            report.warning(format!(
                "Property '{property_name}' from schema '{schema_name}' has no validation rule on {}",
                descriptor.name
            ));
            continue;
        }

        let schema_requires = definition.is_required(property_name);
        let rule_requires = descriptor.rule_requires(property_name);

        if schema_requires && !rule_requires {
            report.issue(format!(
                "Property '{property_name}' is required in schema '{schema_name}' but not in model validation"
            ));
        } else if !schema_requires && rule_requires {
            report.issue(format!(
                "Property '{property_name}' is optional in schema '{schema_name}' but required in model validation"
            ));
        }
    }
}

fn check_casts(
    report: &mut VerifyReport,
    schema_name: &str,
    definition: &SchemaDefinition,
    descriptor: &ModelDescriptor,
) {
    for (property_name, property) in &definition.properties {
        let Some(expected) = property.cast_kind() else {
            continue;
        };

        match descriptor.casts.get(property_name) {
            None => report.warning(format!(
                "Property '{property_name}' from schema '{schema_name}' should be cast to {expected} on {}",
                descriptor.name
            )),
            Some(actual) if *actual != expected => report.warning(format!(
                "Property '{property_name}' on {} is cast to {actual} but schema '{schema_name}' expects {expected}",
                descriptor.name
            )),
            Some(_) => {}
        }
    }
}
