//! Static artifact descriptors
//!
//! Every generated model is accompanied by a JSON descriptor capturing its
//! fillable fields, casts and validation rules. The verifier reads these
//! descriptors directly instead of introspecting generated source code.

use crate::schema::CastKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Required-field marker in a validation rule string
pub const REQUIRED_TAG: &str = "required";

/// Replacement marker used by partial-update rule sets
pub const SOMETIMES_TAG: &str = "sometimes";

/// Descriptor of one generated model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Model name (PascalCase, derived from the schema name)
    pub name: String,

    /// Externally settable fields, in schema order
    #[serde(default)]
    pub fillable: Vec<String>,

    /// Field -> storage cast
    #[serde(default)]
    pub casts: IndexMap<String, CastKind>,

    /// Field -> pipe-joined validation rule string
    #[serde(default)]
    pub validation_rules: IndexMap<String, String>,
}

impl ModelDescriptor {
    /// Check whether a field is declared fillable
    pub fn has_fillable(&self, field: &str) -> bool {
        self.fillable.iter().any(|f| f == field)
    }

    /// Whether a field's rule carries the required tag
    pub fn rule_requires(&self, field: &str) -> bool {
        self.validation_rules
            .get(field)
            .map(|rule| rule.split('|').any(|tag| tag == REQUIRED_TAG))
            .unwrap_or(false)
    }

    /// Rule set for partial updates: every `required` tag becomes `sometimes`
    pub fn update_rules(&self) -> IndexMap<String, String> {
        self.validation_rules
            .iter()
            .map(|(field, rule)| {
                let rewritten = rule
                    .split('|')
                    .map(|tag| if tag == REQUIRED_TAG { SOMETIMES_TAG } else { tag })
                    .collect::<Vec<_>>()
                    .join("|");
                (field.clone(), rewritten)
            })
            .collect()
    }
}
