//! ArtifactRegistry - descriptor loading

use indexmap::IndexMap;
use shared::{ModelDescriptor, Result};
use std::path::Path;

/// All model descriptors found in a generated-models directory.
///
/// A descriptor that fails to load becomes a warning, not an error, so one
/// corrupt artifact never aborts a verification run.
#[derive(Debug, Default)]
pub struct ArtifactRegistry {
    /// Model name -> descriptor, in file-name order
    pub descriptors: IndexMap<String, ModelDescriptor>,

    /// Per-file load failures, downgraded from errors
    pub load_warnings: Vec<String>,
}

impl ArtifactRegistry {
    /// Load every `*.json` descriptor under `dir`.
    ///
    /// A missing directory yields an empty registry.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut registry = Self::default();

        if !dir.exists() {
            return Ok(registry);
        }

        let mut entries: Vec<_> = std::fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match load_descriptor(&path) {
                Ok(descriptor) => {
                    registry
                        .descriptors
                        .insert(descriptor.name.clone(), descriptor);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "could not load artifact descriptor");
                    registry.load_warnings.push(format!(
                        "Could not load artifact descriptor {}: {err}",
                        path.display()
                    ));
                }
            }
        }

        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<&ModelDescriptor> {
        self.descriptors.get(name)
    }

    pub fn model_names(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}

fn load_descriptor(path: &Path) -> Result<ModelDescriptor> {
    let content = std::fs::read_to_string(path)?;
    let descriptor: ModelDescriptor = serde_json::from_str(&content)?;
    Ok(descriptor)
}
