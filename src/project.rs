//! A loaded project: root directory, configuration, and application short name.
//!
//! Loading a [`Project`] is the initialization step of every command. Once it
//! exists, every documentation path can be computed without touching the
//! filesystem again:
//!
//! ```text
//! <root>/components/account-card.tsx                       component source
//! <root>/app/global.ts                                     APPNAME source
//! <root>/app/<APPNAME>/docs/components/                    docs folder
//! <root>/app/<APPNAME>/docs/components/account-card/page.tsx
//! <root>/app/<APPNAME>/docs/components/navLinks.json       navigation manifest
//! <root>/metadata.json                                     metadata manifest
//! <root>/exports/account-card.yaml                         component export
//! ```

use crate::config::{self, ConfigError, ProjectConfig};
use crate::naming;
use crate::types::ComponentMetadata;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: ProjectConfig,
    app_name: String,
}

impl Project {
    /// Load `compdoc.toml` (if any) and resolve the application short name.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config = config::load_config(root)?;
        let app_name = config::load_app_name(root, &config)?;
        tracing::debug!(root = %root.display(), app_name = %app_name, "project loaded");
        Ok(Self::new(root, config, app_name))
    }

    /// Build a project from already-resolved parts.
    pub fn new(root: &Path, config: ProjectConfig, app_name: impl Into<String>) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
            app_name: app_name.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join(&self.config.components_dir)
    }

    /// Folder holding all generated documentation pages.
    pub fn docs_dir(&self) -> PathBuf {
        self.root
            .join("app")
            .join(&self.app_name)
            .join(&self.config.docs_dir)
    }

    /// Folder of one component's documentation page.
    pub fn doc_folder(&self, meta: &ComponentMetadata) -> PathBuf {
        self.docs_dir()
            .join(naming::doc_folder_name(&meta.suggested_filename))
    }

    /// Full path of one component's documentation page.
    pub fn doc_page_path(&self, meta: &ComponentMetadata) -> PathBuf {
        self.doc_folder(meta).join(self.config.page_filename())
    }

    pub fn nav_manifest_path(&self) -> PathBuf {
        self.docs_dir().join(&self.config.nav_manifest)
    }

    pub fn metadata_manifest_path(&self) -> PathBuf {
        self.root.join(&self.config.metadata_manifest)
    }

    pub fn exports_dir(&self) -> PathBuf {
        self.root.join(&self.config.exports_dir)
    }

    /// Source path for a component given by name, with or without extension.
    pub fn component_path(&self, name: &str) -> PathBuf {
        let suffix = format!(".{}", self.config.component_extension);
        if name.ends_with(&suffix) {
            self.components_dir().join(name)
        } else {
            self.components_dir().join(format!("{name}{suffix}"))
        }
    }

    /// Navigation href for a component's documentation page.
    pub fn nav_href(&self, meta: &ComponentMetadata) -> String {
        naming::nav_href(&self.config.route_prefix, &meta.suggested_filename)
    }
}
