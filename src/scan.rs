//! Component discovery and inventory.
//!
//! Lists the component sources of a project and pairs each one with its
//! documentation metadata and whether its page already exists.
//!
//! ## Discovery
//!
//! Only direct children of the components directory are considered, and only
//! regular files whose name ends in `.<component_extension>`. Subdirectories
//! such as `components/lib/` are ignored. Results are sorted by filename so
//! every run processes components in the same order.
//!
//! A project without a components directory is not an error: it simply has
//! no components yet.
//!
//! ## Inventory
//!
//! Reading and extracting each file is independent of every other file, so
//! the inventory fans out over rayon's parallel iterator. The output keeps
//! discovery order. Components without metadata stay in the inventory so the
//! caller can report them.

use crate::extract::MetadataExtractor;
use crate::project::Project;
use crate::types::{ComponentFile, ComponentInfo};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error reading {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("Failed to list components: {0}")]
    Walk(#[from] walkdir::Error),
}

/// List component files directly inside `dir` with the given extension.
pub fn discover_components(dir: &Path, extension: &str) -> Result<Vec<ComponentFile>, ScanError> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "components directory does not exist");
        return Ok(Vec::new());
    }

    let suffix = format!(".{extension}");
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().to_string();
        if !filename.ends_with(&suffix) {
            continue;
        }
        let modified = entry
            .metadata()?
            .modified()
            .map_err(|source| ScanError::Io {
                path: entry.path().to_path_buf(),
                source,
            })?;
        files.push(ComponentFile {
            path: entry.path().to_path_buf(),
            filename,
            modified,
        });
    }
    tracing::debug!(dir = %dir.display(), count = files.len(), "components discovered");
    Ok(files)
}

/// Read every file, extract its metadata, and check for an existing page.
pub fn build_inventory(
    project: &Project,
    files: Vec<ComponentFile>,
    extractor: &dyn MetadataExtractor,
) -> Result<Vec<ComponentInfo>, ScanError> {
    files
        .into_par_iter()
        .map(|file| -> Result<ComponentInfo, ScanError> {
            let content = fs::read_to_string(&file.path).map_err(|source| ScanError::Io {
                path: file.path.clone(),
                source,
            })?;
            let metadata = extractor.extract(&content);
            let has_documentation = metadata
                .as_ref()
                .is_some_and(|meta| project.doc_page_path(meta).exists());
            tracing::debug!(
                file = %file.filename,
                has_metadata = metadata.is_some(),
                has_documentation,
                "component inspected"
            );
            Ok(ComponentInfo {
                file,
                metadata,
                has_documentation,
            })
        })
        .collect()
}

/// Discover the project's components and build their inventory.
pub fn scan(
    project: &Project,
    extractor: &dyn MetadataExtractor,
) -> Result<Vec<ComponentInfo>, ScanError> {
    let files = discover_components(
        &project.components_dir(),
        &project.config().component_extension,
    )?;
    build_inventory(project, files, extractor)
}
