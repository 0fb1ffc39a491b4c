//! Shared test utilities for the compdoc test suite.
//!
//! Builds throwaway project trees in a temp directory so each test can run
//! discovery and generation against real files without sharing state.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let fixture = ProjectFixture::new("accounts");
//! fixture.add_component("account-card.tsx", &account_card_source());
//! fixture.add_component("plain.tsx", PLAIN_SOURCE);
//!
//! let project = fixture.project();
//! assert!(fixture.exists("app/accounts/docs/components/account-card/page.tsx"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

use crate::project::Project;
use crate::types::ComponentMetadata;

// =========================================================================
// Component sources
// =========================================================================

/// A component without any documentation markers.
pub const PLAIN_SOURCE: &str = r#"import React from 'react';

export default function Plain() {
  return <div>plain</div>;
}
"#;

/// Source text declaring all three metadata markers.
pub fn component_source(suggested_filename: &str, display_name: &str, example_set: &str) -> String {
    format!(
        r#"'use client';
import React from 'react';
import {{ ComponentDoc }} from './component-documentation-hub';

export const SUGGESTED_FILE = "{suggested_filename}";
export const SUGGESTED_DISPLAYNAME = "{display_name}";

export default function Component() {{
  return <div />;
}}

export const {example_set}: ComponentDoc[] = [];
"#
    )
}

pub fn account_card_source() -> String {
    component_source("AccountCard.tsx", "Account Card", "examplesAccountCard")
}

pub fn account_card_metadata() -> ComponentMetadata {
    ComponentMetadata {
        suggested_filename: "AccountCard.tsx".to_string(),
        display_name: "Account Card".to_string(),
        example_set_name: "examplesAccountCard".to_string(),
    }
}

// =========================================================================
// Project fixture
// =========================================================================

/// A project root in a temp directory with `app/global.ts` and an empty
/// `components/` directory.
pub struct ProjectFixture {
    tmp: TempDir,
}

impl ProjectFixture {
    pub fn new(app_name: &str) -> Self {
        let fixture = Self::bare();
        fixture.write(
            "app/global.ts",
            &format!("export const APPNAME = \"{app_name}\";\n"),
        );
        fs::create_dir_all(fixture.root().join("components")).unwrap();
        fixture
    }

    /// An empty project root (no global file, no components).
    pub fn bare() -> Self {
        Self {
            tmp: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn project(&self) -> Project {
        Project::load(self.root()).unwrap()
    }

    pub fn add_component(&self, filename: &str, content: &str) -> PathBuf {
        self.write(&format!("components/{filename}"), content)
    }

    /// Write a file relative to the root, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root().join(rel))
            .unwrap_or_else(|e| panic!("failed to read {rel}: {e}"))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.root().join(rel).exists()
    }

    /// Every file under the root with its content, sorted by path.
    pub fn snapshot(&self) -> Vec<(PathBuf, String)> {
        let mut files: Vec<(PathBuf, String)> = walkdir::WalkDir::new(self.root())
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let rel = e.path().strip_prefix(self.root()).unwrap().to_path_buf();
                let content = fs::read_to_string(e.path()).unwrap();
                (rel, content)
            })
            .collect();
        files.sort();
        files
    }
}

/// Set a file's modification time to `secs_ago` seconds in the past.
pub fn set_age(path: &Path, secs_ago: u64) {
    let time = SystemTime::now() - Duration::from_secs(secs_ago);
    fs::File::options()
        .write(true)
        .open(path)
        .and_then(|f| f.set_modified(time))
        .unwrap_or_else(|e| panic!("failed to set mtime of {}: {e}", path.display()));
}
