//! Navigation manifest: the sorted list of links shown in the docs menu.
//!
//! The manifest is a JSON array stored next to the generated pages:
//!
//! ```json
//! [
//!   { "href": "/tools/docs/components/account-card", "label": "Account Card" },
//!   { "href": "/tools/docs/components/map-of-europe", "label": "Map of Europe" }
//! ]
//! ```
//!
//! It is plain data, read with `serde_json`, never evaluated. Updates are
//! read-modify-write of the whole file:
//!
//! - links are unique by `href`; inserting a known href changes nothing
//! - after an insert the list is re-sorted by label, ignoring case
//! - the file is rewritten in full
//!
//! A missing manifest is an empty one. Anything else that prevents reading or
//! parsing it is an error, and nothing is written in that case.

use crate::types::NavLink;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Failed to update navigation manifest {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("Invalid navigation manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Result of [`NavManifest::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavUpdate {
    Added,
    AlreadyExists,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavManifest {
    links: Vec<NavLink>,
}

impl NavManifest {
    /// Load the manifest, or an empty one if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(NavError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let links = serde_json::from_str(&content).map_err(|source| NavError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { links })
    }

    /// Write the whole manifest, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let io_err = |source| NavError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let mut json = serde_json::to_string_pretty(&self.links).map_err(|source| {
            NavError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        json.push('\n');
        fs::write(path, json).map_err(io_err)
    }

    /// Add a link unless one with the same href is already present.
    pub fn insert(&mut self, link: NavLink) -> NavUpdate {
        if self.contains_href(&link.href) {
            return NavUpdate::AlreadyExists;
        }
        self.links.push(link);
        self.links.sort_by_cached_key(|l| l.label.to_lowercase());
        NavUpdate::Added
    }

    pub fn contains_href(&self, href: &str) -> bool {
        self.links.iter().any(|l| l.href == href)
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }
}

/// Load, insert, and save in one step. The file is only rewritten when the
/// link was actually added.
pub fn add_link(path: &Path, link: NavLink) -> Result<NavUpdate, NavError> {
    let mut manifest = NavManifest::load(path)?;
    let update = manifest.insert(link);
    if update == NavUpdate::Added {
        manifest.save(path)?;
    }
    Ok(update)
}
