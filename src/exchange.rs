//! Component export and import as YAML.
//!
//! `compdoc component export account-card` writes
//! `exports/account-card.yaml`:
//!
//! ```yaml
//! name: account-card
//! content: |
//!   'use client';
//!   import React from 'react';
//!   ...
//! ```
//!
//! `compdoc component import exports/account-card.yaml` writes `content` back
//! to `components/account-card.tsx`. Relative import paths are resolved
//! against the project root. Importing over an existing component needs
//! `--force`; exports are always rewritten.

use crate::project::Project;
use crate::scaffold::{self, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Component file not found: {0}")]
    ComponentNotFound(PathBuf),
    #[error("Invalid component export {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("IO error on {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("{0}")]
    Scaffold(#[from] ScaffoldError),
}

/// One exported component: its name (file stem) and full source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentExport {
    pub name: String,
    pub content: String,
}

/// Write `<exports_dir>/<name>.yaml` for a component given by file name,
/// with or without extension.
pub fn export_component(project: &Project, name: &str) -> Result<PathBuf, ExchangeError> {
    let source = project.component_path(name);
    let content = match fs::read_to_string(&source) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ExchangeError::ComponentNotFound(source));
        }
        Err(e) => return Err(ExchangeError::Io { path: source, source: e }),
    };

    let suffix = format!(".{}", project.config().component_extension);
    let stem = name.strip_suffix(suffix.as_str()).unwrap_or(name);
    let export = ComponentExport {
        name: stem.to_string(),
        content,
    };

    let dir = project.exports_dir();
    let path = dir.join(format!("{stem}.yaml"));
    let yaml = serde_yaml::to_string(&export).map_err(|source| ExchangeError::Yaml {
        path: path.clone(),
        source,
    })?;
    fs::create_dir_all(&dir).map_err(|source| ExchangeError::Io {
        path: dir.clone(),
        source,
    })?;
    fs::write(&path, yaml).map_err(|source| ExchangeError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(export = %path.display(), "component exported");
    Ok(path)
}

/// Restore a component from an export file.
pub fn import_component(
    project: &Project,
    export_file: &Path,
    force: bool,
) -> Result<PathBuf, ExchangeError> {
    let export_path = project.root().join(export_file);
    let text = fs::read_to_string(&export_path).map_err(|source| ExchangeError::Io {
        path: export_path.clone(),
        source,
    })?;
    let export: ComponentExport =
        serde_yaml::from_str(&text).map_err(|source| ExchangeError::Yaml {
            path: export_path.clone(),
            source,
        })?;
    scaffold::validate_name(&export.name)?;

    let target = project.component_path(&export.name);
    if target.exists() && !force {
        return Err(ScaffoldError::Exists(target).into());
    }
    let dir = project.components_dir();
    fs::create_dir_all(&dir).map_err(|source| ExchangeError::Io { path: dir, source })?;
    fs::write(&target, &export.content).map_err(|source| ExchangeError::Io {
        path: target.clone(),
        source,
    })?;
    tracing::info!(component = %target.display(), "component imported");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn export_then_import_restores_source() {
        let fixture = ProjectFixture::new("accounts");
        let source = account_card_source();
        fixture.add_component("account-card.tsx", &source);

        let export = export_component(&fixture.project(), "account-card.tsx").unwrap();
        assert!(export.ends_with("exports/account-card.yaml"));

        let parsed: ComponentExport =
            serde_yaml::from_str(&fixture.read("exports/account-card.yaml")).unwrap();
        assert_eq!(parsed.name, "account-card");
        assert_eq!(parsed.content, source);

        fs::remove_file(fixture.root().join("components/account-card.tsx")).unwrap();
        import_component(&fixture.project(), Path::new("exports/account-card.yaml"), false)
            .unwrap();
        assert_eq!(fixture.read("components/account-card.tsx"), source);
    }

    #[test]
    fn export_of_missing_component_is_error() {
        let fixture = ProjectFixture::new("accounts");
        assert!(matches!(
            export_component(&fixture.project(), "ghost"),
            Err(ExchangeError::ComponentNotFound(_))
        ));
        assert!(!fixture.exists("exports"));
    }

    #[test]
    fn import_does_not_overwrite_without_force() {
        let fixture = ProjectFixture::new("accounts");
        fixture.add_component("widget.tsx", "current");
        fixture.write("widget.yaml", "name: widget\ncontent: imported\n");
        let project = fixture.project();

        let result = import_component(&project, Path::new("widget.yaml"), false);
        assert!(matches!(
            result,
            Err(ExchangeError::Scaffold(ScaffoldError::Exists(_)))
        ));
        assert_eq!(fixture.read("components/widget.tsx"), "current");

        import_component(&project, Path::new("widget.yaml"), true).unwrap();
        assert_eq!(fixture.read("components/widget.tsx"), "imported");
    }

    #[test]
    fn import_rejects_names_outside_components_dir() {
        let fixture = ProjectFixture::new("accounts");
        fixture.write("evil.yaml", "name: ../escape\ncontent: x\n");
        assert!(matches!(
            import_component(&fixture.project(), Path::new("evil.yaml"), true),
            Err(ExchangeError::Scaffold(ScaffoldError::InvalidName(_)))
        ));
        assert!(!fixture.exists("escape.tsx"));
    }

    #[test]
    fn import_of_malformed_yaml_is_error() {
        let fixture = ProjectFixture::new("accounts");
        fixture.write("broken.yaml", "just a string\n");
        assert!(matches!(
            import_component(&fixture.project(), Path::new("broken.yaml"), false),
            Err(ExchangeError::Yaml { .. })
        ));
    }
}
