//! Rust source rendering for generated models

use crate::rules::{doc_line, rust_type};
use shared::{ModelDescriptor, SchemaDefinition, REQUIRED_TAG, SOMETIMES_TAG};

/// Marker carried by every emitted source file; `refresh --clean` only
/// deletes files containing it.
pub const GENERATED_MARKER: &str = "@generated";

/// Render the Rust source for one model.
///
/// The emitted file declares the struct, its fillable/cast/rule tables and
/// a derived partial-update rule set, mirroring the JSON descriptor.
pub fn render_source(definition: &SchemaDefinition, descriptor: &ModelDescriptor) -> String {
    let name = &descriptor.name;

    let mut out = String::new();
    out.push_str("//! Generated model from OpenAPI specification\n");
    out.push_str("//!\n");
    out.push_str(&format!(
        "//! {GENERATED_MARKER} This file is auto-generated. Do not edit manually.\n\n"
    ));
    out.push_str("use serde::{Deserialize, Serialize};\n\n");

    out.push_str(&format!("/// {name}\n"));
    if !definition.properties.is_empty() {
        out.push_str("///\n");
        for (field, property) in &definition.properties {
            out.push_str(&format!("/// - {}\n", doc_line(field, property)));
        }
    }
    out.push_str("#[derive(Debug, Clone, Serialize, Deserialize)]\n");
    out.push_str(&format!("pub struct {name} {{\n"));
    for (field, property) in &definition.properties {
        let mut field_type = rust_type(property);
        if property.nullable || !definition.is_required(field) {
            field_type = format!("Option<{field_type}>");
        }
        out.push_str(&format!("    pub {field}: {field_type},\n"));
    }
    out.push_str("}\n\n");

    out.push_str(&format!("impl {name} {{\n"));

    out.push_str("    /// The attributes that are mass assignable.\n");
    out.push_str("    pub const FILLABLE: &'static [&'static str] = &[\n");
    for field in &descriptor.fillable {
        out.push_str(&format!("        \"{field}\",\n"));
    }
    out.push_str("    ];\n\n");

    out.push_str("    /// The attributes that should be cast.\n");
    out.push_str("    pub const CASTS: &'static [(&'static str, &'static str)] = &[\n");
    for (field, cast) in &descriptor.casts {
        out.push_str(&format!("        (\"{field}\", \"{cast}\"),\n"));
    }
    out.push_str("    ];\n\n");

    out.push_str("    /// Validation rules for this model.\n");
    out.push_str("    pub const VALIDATION_RULES: &'static [(&'static str, &'static str)] = &[\n");
    for (field, rule) in &descriptor.validation_rules {
        out.push_str(&format!("        (\"{field}\", \"{rule}\"),\n"));
    }
    out.push_str("    ];\n\n");

    out.push_str(&format!(
        "    /// Validation rules for partial updates: `{REQUIRED_TAG}` becomes `{SOMETIMES_TAG}`.\n"
    ));
    out.push_str("    pub fn update_validation_rules() -> Vec<(&'static str, String)> {\n");
    out.push_str("        Self::VALIDATION_RULES\n");
    out.push_str("            .iter()\n");
    out.push_str("            .map(|(field, rule)| {\n");
    out.push_str("                let rewritten = rule\n");
    out.push_str("                    .split('|')\n");
    out.push_str(&format!(
        "                    .map(|tag| if tag == \"{REQUIRED_TAG}\" {{ \"{SOMETIMES_TAG}\" }} else {{ tag }})\n"
    ));
    out.push_str("                    .collect::<Vec<_>>()\n");
    out.push_str("                    .join(\"|\");\n");
    out.push_str("                (*field, rewritten)\n");
    out.push_str("            })\n");
    out.push_str("            .collect()\n");
    out.push_str("    }\n");
    out.push_str("}\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::build_descriptor;
    use shared::{PropertyDefinition, PropertyType, SchemaDefinition};

    fn profile_schema() -> SchemaDefinition {
        let mut definition = SchemaDefinition::default();
        definition.properties.insert(
            "platform".to_string(),
            PropertyDefinition {
                property_type: PropertyType::String,
                max_length: Some(50),
                ..Default::default()
            },
        );
        definition.properties.insert(
            "is_active".to_string(),
            PropertyDefinition {
                property_type: PropertyType::Boolean,
                ..Default::default()
            },
        );
        definition.required = vec!["platform".to_string()];
        definition
    }

    #[test]
    fn test_rendered_source_structure() {
        let definition = profile_schema();
        let descriptor = build_descriptor("SocialMediaProfile", &definition);
        let source = render_source(&definition, &descriptor);

        assert!(source.contains(GENERATED_MARKER));
        assert!(source.contains("pub struct SocialMediaProfile {"));
        assert!(source.contains("pub platform: String,"));
        assert!(source.contains("pub is_active: Option<bool>,"));
        assert!(source.contains("\"platform\",\n"));
        assert!(source.contains("(\"is_active\", \"boolean\"),"));
        assert!(source.contains("(\"platform\", \"required|string|max:50\"),"));
        assert!(source.contains("pub fn update_validation_rules()"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let definition = profile_schema();
        let descriptor = build_descriptor("SocialMediaProfile", &definition);

        let first = render_source(&definition, &descriptor);
        let second = render_source(&definition, &descriptor);
        assert_eq!(first, second);
    }
}
