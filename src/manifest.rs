//! Metadata manifest: a JSON object describing every documented component.
//!
//! ```json
//! {
//!   "Account Card": {
//!     "filename": "AccountCard.tsx",
//!     "exampleFunctionName": "examplesAccountCard"
//!   }
//! }
//! ```
//!
//! Keys are display names. A generation run sets the keys of the components
//! it processed and leaves every other key exactly as it found it, including
//! values that do not follow the entry shape above. Existing keys keep their
//! position; new keys are appended.
//!
//! A missing manifest starts out empty and is created on save. A manifest
//! that cannot be read, is not valid JSON, or is not a JSON object is an
//! error.

use crate::types::{ComponentMetadata, MetadataEntry};
use serde_json::{Map, Value, json};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read metadata file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to write metadata file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("Invalid metadata file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Metadata file {0} must contain a JSON object")]
    NotAnObject(PathBuf),
}

/// Whether [`MetadataManifest::save`] touched the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Written,
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataManifest {
    entries: Map<String, Value>,
    /// Serialized form as loaded, used to skip no-op writes.
    original: Option<String>,
}

impl MetadataManifest {
    /// Load the manifest, or an empty one if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ManifestError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let value: Value = serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        match value {
            Value::Object(entries) => Ok(Self {
                entries,
                original: Some(content),
            }),
            _ => Err(ManifestError::NotAnObject(path.to_path_buf())),
        }
    }

    /// Set the entry of every component, keyed by display name.
    pub fn merge<'a>(&mut self, components: impl IntoIterator<Item = &'a ComponentMetadata>) {
        for meta in components {
            self.entries.insert(
                meta.display_name.clone(),
                json!({
                    "filename": meta.suggested_filename,
                    "exampleFunctionName": meta.example_set_name,
                }),
            );
        }
    }

    /// Write the manifest as pretty JSON unless the content is unchanged.
    pub fn save(&self, path: &Path) -> Result<SaveOutcome, ManifestError> {
        let json = self.to_json().map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if self.original.as_deref() == Some(json.as_str()) {
            return Ok(SaveOutcome::Unchanged);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ManifestError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, &json).map_err(|source| ManifestError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(SaveOutcome::Written)
    }

    pub fn get(&self, display_name: &str) -> Option<&Value> {
        self.entries.get(display_name)
    }

    /// Typed entry for a display name; `None` if absent or not entry-shaped.
    pub fn entry(&self, display_name: &str) -> Option<MetadataEntry> {
        self.get(display_name)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(&self.entries)?;
        json.push('\n');
        Ok(json)
    }
}

/// Load, merge, and save in one step.
pub fn update_metadata_file<'a>(
    path: &Path,
    components: impl IntoIterator<Item = &'a ComponentMetadata>,
) -> Result<SaveOutcome, ManifestError> {
    let mut manifest = MetadataManifest::load(path)?;
    manifest.merge(components);
    manifest.save(path)
}
