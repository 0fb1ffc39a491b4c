//! Staleness detection for generated documentation pages.
//!
//! Decides whether a component's documentation page must be regenerated.
//! The checks run in order and the first one that fires wins:
//!
//! 1. The component declares no metadata → nothing to generate, up to date.
//! 2. The page does not exist → stale.
//! 3. The component file is strictly newer than the page → stale.
//! 4. The page does not mention the component's example set name → stale.
//! 5. Otherwise → up to date.
//!
//! Modification times are compared as reported by the filesystem. Equal
//! timestamps do not count as newer.
//!
//! A missing component file is a hard error: the caller asked about a
//! specific component and it isn't there. A missing page is the normal
//! "never generated" state and feeds step 2.

use crate::extract::MetadataExtractor;
use crate::project::Project;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StalenessError {
    #[error("Component file not found: {0}")]
    ComponentNotFound(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// Result of comparing a component with its documentation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The component has no documentation metadata.
    NoMetadata,
    /// The page has never been generated.
    PageMissing,
    /// The component changed after the page was written.
    SourceNewer,
    /// The page no longer references the component's example set.
    ExampleSetMissing,
    UpToDate,
}

impl UpdateStatus {
    pub fn needs_update(self) -> bool {
        matches!(
            self,
            Self::PageMissing | Self::SourceNewer | Self::ExampleSetMissing
        )
    }
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::NoMetadata => "no documentation metadata",
            Self::PageMissing => "documentation page missing",
            Self::SourceNewer => "component modified after documentation",
            Self::ExampleSetMissing => "documentation does not reference the example set",
            Self::UpToDate => "up to date",
        };
        f.write_str(reason)
    }
}

/// Check whether the named component's documentation page is stale.
///
/// `component_name` is the source file name, with or without extension.
pub fn check_staleness(
    project: &Project,
    extractor: &dyn MetadataExtractor,
    component_name: &str,
) -> Result<UpdateStatus, StalenessError> {
    let component_path = project.component_path(component_name);
    let content = match fs::read_to_string(&component_path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StalenessError::ComponentNotFound(component_path));
        }
        Err(source) => {
            return Err(StalenessError::Io {
                path: component_path,
                source,
            });
        }
    };

    let Some(meta) = extractor.extract(&content) else {
        return Ok(UpdateStatus::NoMetadata);
    };

    let page_path = project.doc_page_path(&meta);
    let page_modified = match fs::metadata(&page_path) {
        Ok(m) => modified(&m, &page_path)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(UpdateStatus::PageMissing),
        Err(source) => {
            return Err(StalenessError::Io {
                path: page_path,
                source,
            });
        }
    };
    let component_meta = fs::metadata(&component_path).map_err(|source| StalenessError::Io {
        path: component_path.clone(),
        source,
    })?;
    let component_modified = modified(&component_meta, &component_path)?;

    if component_modified > page_modified {
        tracing::debug!(component = component_name, "component newer than page");
        return Ok(UpdateStatus::SourceNewer);
    }

    let page = fs::read_to_string(&page_path).map_err(|source| StalenessError::Io {
        path: page_path.clone(),
        source,
    })?;
    if !page.contains(&meta.example_set_name) {
        return Ok(UpdateStatus::ExampleSetMissing);
    }

    Ok(UpdateStatus::UpToDate)
}

fn modified(meta: &fs::Metadata, path: &Path) -> Result<SystemTime, StalenessError> {
    meta.modified().map_err(|source| StalenessError::Io {
        path: path.to_path_buf(),
        source,
    })
}
