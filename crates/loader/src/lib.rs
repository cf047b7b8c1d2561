//! # ModelSync Loader
//!
//! Parses an OpenAPI document (YAML or JSON) into a [`SchemaDocument`].

use indexmap::IndexMap;
use serde::Deserialize;
use shared::{Result, SchemaDefinition, SchemaDocument, SchemaError};
use std::path::Path;

/// Conventional spec location at the project root
pub const DEFAULT_SPEC_PATH: &str = "openapi.yaml";

/// Top-level shape of an OpenAPI document, reduced to what we consume
#[derive(Debug, Default, Deserialize)]
struct OpenApiFile {
    components: Option<Components>,
}

#[derive(Debug, Default, Deserialize)]
struct Components {
    schemas: Option<IndexMap<String, SchemaDefinition>>,
}

/// Load the named schemas of an OpenAPI document.
///
/// The format is detected by extension: `.yaml`/`.yml` parse as YAML,
/// anything else as JSON. A document without a `components.schemas`
/// section yields an empty [`SchemaDocument`] with a warning.
pub fn load(path: &Path) -> Result<SchemaDocument> {
    if !path.exists() {
        return Err(SchemaError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    let file: OpenApiFile = if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| parse_error(path, e))?
    } else {
        serde_json::from_str(&content).map_err(|e| parse_error(path, e))?
    };

    let schemas = file
        .components
        .and_then(|c| c.schemas)
        .unwrap_or_default();

    if schemas.is_empty() {
        tracing::warn!(
            path = %path.display(),
            "no schemas found in components.schemas"
        );
    }

    Ok(SchemaDocument { schemas })
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> SchemaError {
    SchemaError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
