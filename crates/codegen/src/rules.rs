//! Validation rule and documentation line derivation

use serde_json::Value;
use shared::{PropertyDefinition, PropertyType, REQUIRED_TAG};

/// Build the pipe-joined validation rule string for one property.
///
/// Object-typed and unmapped properties carry no kind tag; only the
/// required marker and an enum constraint can apply to them.
pub fn validation_rule(property: &PropertyDefinition, required: bool) -> String {
    let mut tags: Vec<String> = Vec::new();

    if required {
        tags.push(REQUIRED_TAG.to_string());
    }

    match property.property_type {
        PropertyType::Integer => tags.push("integer".to_string()),
        PropertyType::Number => tags.push("numeric".to_string()),
        PropertyType::Boolean => tags.push("boolean".to_string()),
        PropertyType::Array => tags.push("array".to_string()),
        PropertyType::String => {
            tags.push("string".to_string());
            match property.format.as_deref() {
                Some("email") => tags.push("email".to_string()),
                Some("uri") => tags.push("url".to_string()),
                _ => {}
            }
            if let Some(min) = property.min_length {
                tags.push(format!("min:{min}"));
            }
            if let Some(max) = property.max_length {
                tags.push(format!("max:{max}"));
            }
        }
        PropertyType::Object | PropertyType::Other => {}
    }

    if let Some(values) = &property.enum_values {
        let joined = values.iter().map(plain_value).collect::<Vec<_>>().join(",");
        tags.push(format!("in:{joined}"));
    }

    tags.join("|")
}

/// One documentation line: `<type> <name> <description> Example: <json>`.
///
/// Nullable properties are rendered with an `Option` type.
pub fn doc_line(name: &str, property: &PropertyDefinition) -> String {
    let mut rendered_type = rust_type(property);
    if property.nullable {
        rendered_type = format!("Option<{rendered_type}>");
    }

    let mut line = format!("{rendered_type} {name}");

    if let Some(description) = property.description.as_deref() {
        if !description.is_empty() {
            line.push(' ');
            line.push_str(description);
        }
    }

    if let Some(example) = &property.example {
        // Value's Display is its JSON encoding
        line.push_str(&format!(" Example: {example}"));
    }

    line
}

/// Rust type used in rendered struct fields and doc lines
pub fn rust_type(property: &PropertyDefinition) -> String {
    match property.property_type {
        PropertyType::Integer => "i64".to_string(),
        PropertyType::Number => "f64".to_string(),
        PropertyType::Boolean => "bool".to_string(),
        PropertyType::Array => "Vec<serde_json::Value>".to_string(),
        PropertyType::Object | PropertyType::Other => "serde_json::Value".to_string(),
        PropertyType::String => match property.format.as_deref() {
            Some("date") => "chrono::NaiveDate".to_string(),
            Some("date-time") => "chrono::DateTime<chrono::Utc>".to_string(),
            _ => "String".to_string(),
        },
    }
}

fn plain_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn string_property() -> PropertyDefinition {
        PropertyDefinition {
            property_type: PropertyType::String,
            ..Default::default()
        }
    }

    #[test]
    fn test_required_string_rule() {
        assert_eq!(validation_rule(&string_property(), true), "required|string");
    }

    #[test]
    fn test_optional_string_rule() {
        assert_eq!(validation_rule(&string_property(), false), "string");
    }

    #[test]
    fn test_email_and_uri_formats() {
        let mut prop = string_property();
        prop.format = Some("email".to_string());
        assert_eq!(validation_rule(&prop, true), "required|string|email");

        prop.format = Some("uri".to_string());
        assert_eq!(validation_rule(&prop, false), "string|url");
    }

    #[test]
    fn test_length_bounds() {
        let mut prop = string_property();
        prop.min_length = Some(3);
        prop.max_length = Some(50);
        assert_eq!(validation_rule(&prop, true), "required|string|min:3|max:50");
    }

    #[test]
    fn test_enum_rule() {
        let mut prop = string_property();
        prop.enum_values = Some(vec![json!("twitter"), json!("facebook"), json!("instagram")]);
        assert_eq!(
            validation_rule(&prop, true),
            "required|string|in:twitter,facebook,instagram"
        );
    }

    #[test]
    fn test_numeric_enum_rule() {
        let prop = PropertyDefinition {
            property_type: PropertyType::Integer,
            enum_values: Some(vec![json!(1), json!(2), json!(3)]),
            ..Default::default()
        };
        assert_eq!(validation_rule(&prop, false), "integer|in:1,2,3");
    }

    #[test]
    fn test_kind_tags() {
        for (property_type, expected) in [
            (PropertyType::Integer, "integer"),
            (PropertyType::Number, "numeric"),
            (PropertyType::Boolean, "boolean"),
            (PropertyType::Array, "array"),
        ] {
            let prop = PropertyDefinition {
                property_type,
                ..Default::default()
            };
            assert_eq!(validation_rule(&prop, false), expected);
        }
    }

    #[test]
    fn test_object_has_no_kind_tag() {
        let prop = PropertyDefinition {
            property_type: PropertyType::Object,
            ..Default::default()
        };
        assert_eq!(validation_rule(&prop, true), "required");
        assert_eq!(validation_rule(&prop, false), "");
    }

    #[test]
    fn test_doc_line_with_example() {
        let prop = PropertyDefinition {
            property_type: PropertyType::String,
            description: Some("Platform handle".to_string()),
            example: Some(json!("jdoe")),
            ..Default::default()
        };
        assert_eq!(
            doc_line("username", &prop),
            "String username Platform handle Example: \"jdoe\""
        );
    }

    #[test]
    fn test_doc_line_nullable_is_optional() {
        let prop = PropertyDefinition {
            property_type: PropertyType::String,
            format: Some("date-time".to_string()),
            nullable: true,
            ..Default::default()
        };
        assert_eq!(
            doc_line("last_synced_at", &prop),
            "Option<chrono::DateTime<chrono::Utc>> last_synced_at"
        );
    }

    #[test]
    fn test_rust_type_mapping() {
        let date = PropertyDefinition {
            property_type: PropertyType::String,
            format: Some("date".to_string()),
            ..Default::default()
        };
        assert_eq!(rust_type(&date), "chrono::NaiveDate");

        let object = PropertyDefinition {
            property_type: PropertyType::Object,
            ..Default::default()
        };
        assert_eq!(rust_type(&object), "serde_json::Value");
    }
}
