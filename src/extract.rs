//! Documentation metadata extraction from component sources.
//!
//! A component opts into generated documentation by exporting three markers,
//! anywhere in the file:
//!
//! ```text
//! export const SUGGESTED_FILE = "AccountCard.tsx";
//! export const SUGGESTED_DISPLAYNAME = "Account Card";
//! export const examplesAccountCard: ComponentDoc[] = [ ... ];
//! ```
//!
//! The first two are string constants found by their literal names (single or
//! double quotes, optional `: string` annotation). The third is any exported
//! collection whose declared type is `ComponentDoc[]`; its identifier becomes
//! the example set name.
//!
//! Matching is textual, not semantic. Extraction is all or nothing: if any of
//! the three markers is missing the component has no metadata, and callers
//! never see a partially filled [`ComponentMetadata`].
//!
//! The [`MetadataExtractor`] trait is the seam for swapping in a stricter
//! parser without touching discovery or staleness code.

use crate::types::ComponentMetadata;
use regex::Regex;
use std::sync::LazyLock;

/// Constant naming the suggested documentation filename.
pub const SUGGESTED_FILE_KEY: &str = "SUGGESTED_FILE";
/// Constant naming the human-readable title.
pub const DISPLAY_NAME_KEY: &str = "SUGGESTED_DISPLAYNAME";
/// Element type that marks an exported collection as documentation examples.
pub const EXAMPLE_SET_TYPE: &str = "ComponentDoc";

static RE_SUGGESTED_FILE: LazyLock<Regex> =
    LazyLock::new(|| string_constant_regex(SUGGESTED_FILE_KEY).unwrap());

static RE_DISPLAY_NAME: LazyLock<Regex> =
    LazyLock::new(|| string_constant_regex(DISPLAY_NAME_KEY).unwrap());

static RE_EXAMPLE_SET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+const\s+([A-Za-z_$][\w$]*)\s*:\s*ComponentDoc\s*\[\s*\]").unwrap()
});

/// Derives documentation metadata from the text of one component file.
pub trait MetadataExtractor: Send + Sync {
    /// Returns `None` unless every marker is present.
    fn extract(&self, content: &str) -> Option<ComponentMetadata>;
}

/// Regex-based extractor for the `export const` marker convention.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternExtractor;

impl MetadataExtractor for PatternExtractor {
    fn extract(&self, content: &str) -> Option<ComponentMetadata> {
        let suggested_filename = capture(&RE_SUGGESTED_FILE, content)?;
        let display_name = capture(&RE_DISPLAY_NAME, content)?;
        let example_set_name = capture(&RE_EXAMPLE_SET, content)?;
        Some(ComponentMetadata {
            suggested_filename,
            display_name,
            example_set_name,
        })
    }
}

/// Value of `export const <key> = "<value>"` in `content`, if present.
///
/// Also used to read the application short name out of the global file.
pub fn extract_string_constant(content: &str, key: &str) -> Option<String> {
    let re = string_constant_regex(key).ok()?;
    capture(&re, content)
}

fn string_constant_regex(key: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r#"export\s+const\s+{}\s*(?::\s*string\s*)?=\s*(?:"([^"\r\n]*)"|'([^'\r\n]*)')"#,
        regex::escape(key)
    ))
}

/// First participating capture group of the first match.
fn capture(re: &Regex, content: &str) -> Option<String> {
    re.captures(content)
        .and_then(|caps| caps.iter().skip(1).flatten().next())
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}
