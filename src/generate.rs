//! Documentation page generation.
//!
//! Each documented component gets one page: a small client module that
//! imports the component's example set and hands it to the shared
//! documentation hub renderer. For `AccountCard.tsx` declared in
//! `components/account-card.tsx` the page is written to
//! `app/<APPNAME>/docs/components/account-card/page.tsx`:
//!
//! ```text
//! 'use client';
//!
//! import React from 'react';
//! import { ComponentDoc, ComponentDocumentationHub } from '@/components/component-documentation-hub';
//! import { examplesAccountCard } from '@/components/account-card';
//!
//! export default function AccountCardDocumentation() {
//!   const componentDocs: ComponentDoc[] = [
//!     ...examplesAccountCard
//!   ];
//!
//!   return <ComponentDocumentationHub components={componentDocs} />;
//! }
//! ```
//!
//! ## Overwrite policy
//!
//! An existing page is left alone unless `force` is set. Skipping is a
//! normal outcome, not an error. Two components whose suggested filenames
//! map to the same folder write to the same page; the later one wins.

use crate::config::ProjectConfig;
use crate::naming;
use crate::project::Project;
use crate::types::ComponentMetadata;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to create documentation page {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// What [`write_page`] did with the page file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Created(PathBuf),
    Overwritten(PathBuf),
    /// The page exists and `force` was not set.
    Skipped(PathBuf),
}

impl PageOutcome {
    /// True when the page file was (re)written.
    pub fn written(&self) -> bool {
        !matches!(self, Self::Skipped(_))
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Created(p) | Self::Overwritten(p) | Self::Skipped(p) => p,
        }
    }
}

/// Render the page module for one component.
///
/// `source_filename` is the component's own file name; its stem becomes the
/// import specifier under `component_import_prefix`.
pub fn render_page(
    meta: &ComponentMetadata,
    source_filename: &str,
    config: &ProjectConfig,
) -> String {
    let examples = &meta.example_set_name;
    format!(
        r#"'use client';

import React from 'react';
import {{ ComponentDoc, ComponentDocumentationHub }} from '{hub}';
import {{ {examples} }} from '{prefix}/{module}';

export default function {export_name}() {{
  const componentDocs: ComponentDoc[] = [
    ...{examples}
  ];

  return <ComponentDocumentationHub components={{componentDocs}} />;
}}
"#,
        hub = config.hub_module,
        prefix = config.component_import_prefix,
        module = naming::module_name(source_filename),
        export_name = naming::page_export_name(&meta.display_name),
    )
}

/// Write the documentation page for one component, honoring the overwrite policy.
pub fn write_page(
    project: &Project,
    meta: &ComponentMetadata,
    source_filename: &str,
    force: bool,
) -> Result<PageOutcome, GenerateError> {
    let folder = project.doc_folder(meta);
    fs::create_dir_all(&folder).map_err(|source| GenerateError::Io {
        path: folder.clone(),
        source,
    })?;

    let path = folder.join(project.config().page_filename());
    let exists = path.exists();
    if exists && !force {
        tracing::debug!(page = %path.display(), "page exists, skipping");
        return Ok(PageOutcome::Skipped(path));
    }

    let content = render_page(meta, source_filename, project.config());
    fs::write(&path, content).map_err(|source| GenerateError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(page = %path.display(), "documentation page written");

    Ok(if exists {
        PageOutcome::Overwritten(path)
    } else {
        PageOutcome::Created(path)
    })
}
