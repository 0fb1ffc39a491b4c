//! Project configuration.
//!
//! Two sources feed the configuration of a run:
//!
//! 1. **`compdoc.toml`** (optional) at the project root. Describes where the
//!    project keeps its components, pages, and manifests. Every key has a
//!    default matching the conventional layout, so most projects have no
//!    config file at all.
//! 2. **The global file** (`app/global.ts` by default), which must export the
//!    application short name as a string constant:
//!
//!    ```text
//!    export const APPNAME = "accounts";
//!    ```
//!
//!    The short name is part of every documentation path. A missing file or
//!    constant is a fatal configuration error.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! components_dir = "components"
//! component_extension = "tsx"
//! global_file = "app/global.ts"
//! app_name_constant = "APPNAME"
//! docs_dir = "docs/components"            # relative to app/<APPNAME>
//! route_prefix = "/tools/docs/components"
//! nav_manifest = "navLinks.json"          # inside docs_dir
//! metadata_manifest = "metadata.json"     # relative to the project root
//! hub_module = "@/components/component-documentation-hub"
//! component_import_prefix = "@/components"
//! exports_dir = "exports"                 # component export/import YAML
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::extract;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file at the project root.
pub const CONFIG_FILENAME: &str = "compdoc.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Global file not found: {0}")]
    GlobalFileMissing(PathBuf),
    #[error("{constant} constant not found in {path}")]
    AppNameMissing { constant: String, path: PathBuf },
}

/// Project layout loaded from `compdoc.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory holding component sources, relative to the project root.
    pub components_dir: String,
    /// Extension (without dot) of component sources and generated pages.
    pub component_extension: String,
    /// File exporting the application short name, relative to the project root.
    pub global_file: String,
    /// Name of the exported constant holding the short name.
    pub app_name_constant: String,
    /// Documentation folder, relative to `app/<short name>`.
    pub docs_dir: String,
    /// URL prefix of generated navigation links.
    pub route_prefix: String,
    /// Navigation manifest filename inside the documentation folder.
    pub nav_manifest: String,
    /// Metadata manifest path relative to the project root.
    pub metadata_manifest: String,
    /// Import specifier of the documentation hub renderer.
    pub hub_module: String,
    /// Import prefix under which component modules are resolved.
    pub component_import_prefix: String,
    /// Directory for YAML component exports, relative to the project root.
    pub exports_dir: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            components_dir: "components".to_string(),
            component_extension: "tsx".to_string(),
            global_file: "app/global.ts".to_string(),
            app_name_constant: "APPNAME".to_string(),
            docs_dir: "docs/components".to_string(),
            route_prefix: "/tools/docs/components".to_string(),
            nav_manifest: "navLinks.json".to_string(),
            metadata_manifest: "metadata.json".to_string(),
            hub_module: "@/components/component-documentation-hub".to_string(),
            component_import_prefix: "@/components".to_string(),
            exports_dir: "exports".to_string(),
        }
    }
}

impl ProjectConfig {
    /// Validate config values are usable for path and link construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.component_extension.is_empty() || self.component_extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "component_extension must be non-empty and must not start with '.'".into(),
            ));
        }
        if !self.route_prefix.starts_with('/') || self.route_prefix.ends_with('/') {
            return Err(ConfigError::Validation(
                "route_prefix must start with '/' and must not end with '/'".into(),
            ));
        }
        for (key, value) in [
            ("components_dir", &self.components_dir),
            ("global_file", &self.global_file),
            ("app_name_constant", &self.app_name_constant),
            ("nav_manifest", &self.nav_manifest),
            ("metadata_manifest", &self.metadata_manifest),
            ("exports_dir", &self.exports_dir),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    /// Filename of a generated documentation page (`page.tsx`).
    pub fn page_filename(&self) -> String {
        format!("page.{}", self.component_extension)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(ProjectConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `compdoc.toml` from the project root as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: config_path,
                source,
            });
        }
    };
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<ProjectConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ProjectConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `compdoc.toml` in the project root, falling back to defaults.
pub fn load_config(root: &Path) -> Result<ProjectConfig, ConfigError> {
    resolve_config(load_raw_config(root)?)
}

/// Read the application short name from the project's global file.
pub fn load_app_name(root: &Path, config: &ProjectConfig) -> Result<String, ConfigError> {
    let path = root.join(&config.global_file);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::GlobalFileMissing(path));
        }
        Err(source) => return Err(ConfigError::Io { path, source }),
    };
    extract::extract_string_constant(&content, &config.app_name_constant).ok_or_else(|| {
        ConfigError::AppNameMissing {
            constant: config.app_name_constant.clone(),
            path,
        }
    })
}

/// Returns a fully-commented stock `compdoc.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# compdoc configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Directory holding component sources, relative to the project root.
components_dir = "components"

# Extension of component sources. Generated pages use the same extension.
component_extension = "tsx"

# File exporting the application short name, relative to the project root.
global_file = "app/global.ts"

# Exported string constant in global_file that holds the short name.
app_name_constant = "APPNAME"

# Documentation folder, relative to app/<short name>.
docs_dir = "docs/components"

# URL prefix of links written to the navigation manifest.
route_prefix = "/tools/docs/components"

# Navigation manifest (JSON array of {href, label}) inside docs_dir.
nav_manifest = "navLinks.json"

# Metadata manifest (JSON object keyed by display name), relative to the root.
metadata_manifest = "metadata.json"

# Import specifier of the documentation hub renderer used by generated pages.
hub_module = "@/components/component-documentation-hub"

# Import prefix under which generated pages resolve component modules.
component_import_prefix = "@/components"

# Directory for `component export` YAML files, relative to the root.
exports_dir = "exports"
"##
}
