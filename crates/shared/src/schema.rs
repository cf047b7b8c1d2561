//! OpenAPI schema types for ModelSync

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON Schema primitive type of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    /// Default when the schema omits `type`
    #[default]
    String,
    /// Any type this tool does not map (no cast, no kind tag)
    #[serde(other)]
    Other,
}

/// A single property definition within a schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    /// Primitive type (defaults to string, matching OpenAPI conventions)
    #[serde(rename = "type", default)]
    pub property_type: PropertyType,

    /// Optional format qualifier (date, date-time, email, uri, ...)
    pub format: Option<String>,

    /// Whether null is an accepted value
    #[serde(default)]
    pub nullable: bool,

    /// Allowed values, in declared order
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,

    /// Minimum string length
    pub min_length: Option<u64>,

    /// Maximum string length
    pub max_length: Option<u64>,

    /// Human-readable description
    pub description: Option<String>,

    /// Example value
    pub example: Option<Value>,
}

impl PropertyDefinition {
    /// Storage cast derived from type and format.
    ///
    /// Plain strings, email/uri formats and unmapped types carry no cast.
    pub fn cast_kind(&self) -> Option<CastKind> {
        match self.property_type {
            PropertyType::Integer => Some(CastKind::Integer),
            PropertyType::Number => Some(CastKind::Float),
            PropertyType::Boolean => Some(CastKind::Boolean),
            PropertyType::Array | PropertyType::Object => Some(CastKind::Array),
            PropertyType::String => match self.format.as_deref() {
                Some("date") => Some(CastKind::Date),
                Some("date-time") => Some(CastKind::Datetime),
                _ => None,
            },
            PropertyType::Other => None,
        }
    }
}

/// Storage/runtime type coercion declared for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastKind {
    Integer,
    Float,
    Boolean,
    Array,
    Date,
    Datetime,
}

impl CastKind {
    /// Lowercase name as written in descriptors and generated sources
    pub fn as_str(&self) -> &'static str {
        match self {
            CastKind::Integer => "integer",
            CastKind::Float => "float",
            CastKind::Boolean => "boolean",
            CastKind::Array => "array",
            CastKind::Date => "date",
            CastKind::Datetime => "datetime",
        }
    }
}

impl std::fmt::Display for CastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named object-type definition with typed properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Properties in document order
    #[serde(default)]
    pub properties: IndexMap<String, PropertyDefinition>,

    /// Names of mandatory properties
    #[serde(default)]
    pub required: Vec<String>,
}

impl SchemaDefinition {
    /// Check whether a field is in the required set
    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|f| f == field)
    }

    /// Property names in document order
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.keys().map(|k| k.as_str()).collect()
    }
}

/// All named schemas of an OpenAPI document, in encounter order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub schemas: IndexMap<String, SchemaDefinition>,
}

impl SchemaDocument {
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Schema names in encounter order
    pub fn schema_names(&self) -> Vec<&str> {
        self.schemas.keys().map(|s| s.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&SchemaDefinition> {
        self.schemas.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(property_type: PropertyType, format: Option<&str>) -> PropertyDefinition {
        PropertyDefinition {
            property_type,
            format: format.map(String::from),
            ..Default::default()
        }
    }

    // ============== Cast Mapping Tests ==============

    #[test]
    fn test_integer_cast() {
        assert_eq!(
            property(PropertyType::Integer, None).cast_kind(),
            Some(CastKind::Integer)
        );
    }

    #[test]
    fn test_number_cast() {
        assert_eq!(
            property(PropertyType::Number, None).cast_kind(),
            Some(CastKind::Float)
        );
    }

    #[test]
    fn test_boolean_cast() {
        assert_eq!(
            property(PropertyType::Boolean, None).cast_kind(),
            Some(CastKind::Boolean)
        );
    }

    #[test]
    fn test_array_and_object_share_cast() {
        assert_eq!(
            property(PropertyType::Array, None).cast_kind(),
            Some(CastKind::Array)
        );
        assert_eq!(
            property(PropertyType::Object, None).cast_kind(),
            Some(CastKind::Array)
        );
    }

    #[test]
    fn test_date_formats_cast() {
        assert_eq!(
            property(PropertyType::String, Some("date")).cast_kind(),
            Some(CastKind::Date)
        );
        assert_eq!(
            property(PropertyType::String, Some("date-time")).cast_kind(),
            Some(CastKind::Datetime)
        );
    }

    #[test]
    fn test_plain_string_has_no_cast() {
        assert_eq!(property(PropertyType::String, None).cast_kind(), None);
    }

    #[test]
    fn test_email_and_uri_have_no_cast() {
        assert_eq!(property(PropertyType::String, Some("email")).cast_kind(), None);
        assert_eq!(property(PropertyType::String, Some("uri")).cast_kind(), None);
    }

    #[test]
    fn test_unknown_type_has_no_cast() {
        assert_eq!(property(PropertyType::Other, None).cast_kind(), None);
    }

    // ============== Parsing Tests ==============

    #[test]
    fn test_property_type_defaults_to_string() {
        let def: PropertyDefinition = serde_yaml::from_str("description: no type here").unwrap();
        assert_eq!(def.property_type, PropertyType::String);
    }

    #[test]
    fn test_unknown_type_tolerated() {
        let def: PropertyDefinition = serde_yaml::from_str("type: binary").unwrap();
        assert_eq!(def.property_type, PropertyType::Other);
    }

    #[test]
    fn test_schema_definition_parse() {
        let yaml = r#"
type: object
properties:
  platform:
    type: string
    maxLength: 50
  is_active:
    type: boolean
required:
  - platform
"#;

        let def: SchemaDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(def.property_names(), vec!["platform", "is_active"]);
        assert!(def.is_required("platform"));
        assert!(!def.is_required("is_active"));
        assert_eq!(def.properties["platform"].max_length, Some(50));
    }

    #[test]
    fn test_property_order_preserved() {
        let yaml = r#"
properties:
  zebra: { type: string }
  apple: { type: string }
  mango: { type: string }
"#;

        let def: SchemaDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(def.property_names(), vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_cast_kind_display() {
        assert_eq!(CastKind::Datetime.to_string(), "datetime");
        assert_eq!(CastKind::Float.to_string(), "float");
    }

    #[test]
    fn test_cast_kind_serialization() {
        let json = serde_json::to_string(&CastKind::Datetime).unwrap();
        assert_eq!(json, "\"datetime\"");

        let parsed: CastKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, CastKind::Datetime);
    }
}
