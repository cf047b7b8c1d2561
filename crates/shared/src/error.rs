//! Error types for ModelSync

use std::path::PathBuf;
use thiserror::Error;

/// General ModelSync error type
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("OpenAPI specification file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse OpenAPI specification {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
