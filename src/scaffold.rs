//! New component scaffolding.
//!
//! `compdoc component create MyWidget` writes `components/my-widget.tsx`
//! with a minimal component and all three documentation markers, so the next
//! `docs generate` picks it up without further edits.

use crate::naming;
use crate::project::Project;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Invalid component name {0:?}: use letters, digits, '-' or '_', starting with a letter")]
    InvalidName(String),
    #[error("Component already exists: {0} (use --force to overwrite)")]
    Exists(PathBuf),
    #[error("Failed to create component {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

pub(crate) fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidName(name.to_string()))
    }
}

/// Source text of a freshly scaffolded component.
pub fn render_component(pascal_name: &str, extension: &str) -> String {
    let display_name = naming::to_display_name(pascal_name);
    format!(
        r#"'use client';

import React from 'react';
import {{ ComponentDoc }} from './component-documentation-hub';

export const SUGGESTED_FILE = "{pascal_name}.{extension}";
export const SUGGESTED_DISPLAYNAME = "{display_name}";

export default function {pascal_name}() {{
  return (
    <div>
      <h1>{display_name}</h1>
    </div>
  );
}}

export const examples{pascal_name}: ComponentDoc[] = [
  {{
    id: '{pascal_name}-default',
    name: '{display_name}',
    description: 'Default rendering of {display_name}.',
    usage: `<{pascal_name} />`,
    example: <{pascal_name} />,
  }},
];
"#
    )
}

/// Create a documented component skeleton in the components directory.
pub fn create_component(project: &Project, name: &str, force: bool) -> Result<PathBuf, ScaffoldError> {
    validate_name(name)?;
    let pascal = naming::to_pascal_case(name);
    let extension = &project.config().component_extension;
    let dir = project.components_dir();
    let path = dir.join(format!("{}.{}", naming::to_kebab_case(&pascal), extension));

    if path.exists() && !force {
        return Err(ScaffoldError::Exists(path));
    }
    fs::create_dir_all(&dir).map_err(|source| ScaffoldError::Io {
        path: dir.clone(),
        source,
    })?;
    fs::write(&path, render_component(&pascal, extension)).map_err(|source| ScaffoldError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(component = %path.display(), "component scaffolded");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{MetadataExtractor, PatternExtractor};
    use crate::test_helpers::*;

    #[test]
    fn scaffold_is_documentation_eligible() {
        let source = render_component("MyWidget", "tsx");
        let meta = PatternExtractor.extract(&source).unwrap();
        assert_eq!(meta.suggested_filename, "MyWidget.tsx");
        assert_eq!(meta.display_name, "My Widget");
        assert_eq!(meta.example_set_name, "examplesMyWidget");
    }

    #[test]
    fn creates_kebab_case_file() {
        let fixture = ProjectFixture::new("accounts");
        let path = create_component(&fixture.project(), "my-widget", false).unwrap();
        assert!(path.ends_with("components/my-widget.tsx"));
        assert!(fixture.read("components/my-widget.tsx").contains("export default function MyWidget()"));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let fixture = ProjectFixture::new("accounts");
        fixture.add_component("my-widget.tsx", "hand written");

        let result = create_component(&fixture.project(), "MyWidget", false);
        assert!(matches!(result, Err(ScaffoldError::Exists(_))));
        assert_eq!(fixture.read("components/my-widget.tsx"), "hand written");

        create_component(&fixture.project(), "MyWidget", true).unwrap();
        assert!(fixture.read("components/my-widget.tsx").contains("SUGGESTED_FILE"));
    }

    #[test]
    fn rejects_invalid_names() {
        let fixture = ProjectFixture::new("accounts");
        for name in ["", "1widget", "../escape", "my widget"] {
            assert!(
                matches!(
                    create_component(&fixture.project(), name, false),
                    Err(ScaffoldError::InvalidName(_))
                ),
                "{name:?} should be rejected"
            );
        }
    }
}
