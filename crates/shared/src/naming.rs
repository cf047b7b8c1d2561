//! Schema-to-model naming rules

/// Schema name suffixes that never become models
pub const EXCLUDED_SUFFIXES: [&str; 4] = ["Input", "Request", "Response", "Error"];

/// Check whether a schema is an input/response shape rather than a model
pub fn is_excluded_schema(schema_name: &str) -> bool {
    EXCLUDED_SUFFIXES
        .iter()
        .any(|suffix| schema_name.ends_with(suffix))
}

/// Derive the model name from a schema name (PascalCase)
///
/// Splits on underscores, hyphens and spaces, upper-casing the first letter
/// of each segment: `social_media_profile` -> `SocialMediaProfile`.
pub fn model_name(schema_name: &str) -> String {
    schema_name
        .split(['_', '-', ' '])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
