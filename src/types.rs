//! Shared types passed between discovery, generation, and the manifests.
//!
//! Nothing here is cached across runs: component files and their metadata are
//! re-read on every invocation, and the manifest rows are rebuilt from them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::SystemTime;

/// A component source file found in the components directory.
#[derive(Debug, Clone)]
pub struct ComponentFile {
    /// Absolute location of the file
    pub path: PathBuf,
    /// Base name with extension, e.g. `account-card.tsx`
    pub filename: String,
    pub modified: SystemTime,
}

/// Documentation metadata declared inside a component file.
///
/// Only ever built when all three markers are present. See
/// [`crate::extract`] for the marker syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMetadata {
    /// Value of `SUGGESTED_FILE`, e.g. `AccountCard.tsx`
    pub suggested_filename: String,
    /// Value of `SUGGESTED_DISPLAYNAME`, e.g. `Account Card`
    pub display_name: String,
    /// Identifier of the exported `ComponentDoc[]` collection
    pub example_set_name: String,
}

/// One inventory row: a component file plus what we know about its docs.
#[derive(Debug, Clone)]
pub struct ComponentInfo {
    pub file: ComponentFile,
    pub metadata: Option<ComponentMetadata>,
    /// Whether the documentation page derived from the metadata exists.
    /// Always false when there is no metadata.
    pub has_documentation: bool,
}

/// A row of the navigation manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

/// Value stored under a display name in the metadata manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataEntry {
    pub filename: String,
    pub example_function_name: String,
}
