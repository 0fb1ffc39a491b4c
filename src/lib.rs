//! # compdoc
//!
//! Keeps documentation pages, navigation links, and a metadata manifest in
//! sync with the UI components of a web project. Component source files are
//! the data source: a component opts into documentation by exporting three
//! markers, and everything else is derived from them.
//!
//! ```text
//! export const SUGGESTED_FILE = "AccountCard.tsx";
//! export const SUGGESTED_DISPLAYNAME = "Account Card";
//! export const examplesAccountCard: ComponentDoc[] = [ ... ];
//! ```
//!
//! # Architecture: One Pass Per Command
//!
//! Every command starts from a loaded [`project::Project`] (configuration plus
//! the application short name) and runs a single pass:
//!
//! ```text
//! 1. Scan      components/  →  inventory        (files + extracted metadata)
//! 2. Generate  inventory    →  page.tsx files   (one folder per component)
//! 3. Record    written pages → navLinks.json    (sorted, unique by href)
//!              processed     → metadata.json    (merged by display name)
//! ```
//!
//! Messages for the user never go straight to the terminal. Commands hand
//! them to an [`output::Reporter`], which either prints colored lines as they
//! happen or collects them into one JSON document at the end.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `compdoc.toml` loading and validation, application short name lookup |
//! | [`project`] | Resolved project: root, config, short name, and every derived path |
//! | [`extract`] | Pattern-based metadata extraction from component source text |
//! | [`scan`] | Component discovery and inventory building |
//! | [`staleness`] | Whether a component's page must be regenerated |
//! | [`generate`] | Documentation page rendering and writing |
//! | [`nav`] | Navigation manifest (`navLinks.json`) |
//! | [`manifest`] | Metadata manifest (`metadata.json`) |
//! | [`manager`] | Drives the commands above end to end |
//! | [`scaffold`] | New component skeletons with all markers in place |
//! | [`exchange`] | Component export to and import from YAML |
//! | [`naming`] | Case conversions and path fragments derived from names |
//! | [`output`] | Text and JSON reporters |
//! | [`types`] | Data shared between modules |
//!
//! # Design Decisions
//!
//! ## Navigation as Data
//!
//! The navigation manifest is a JSON array read and written with `serde_json`.
//! It is never evaluated as code, so a malformed file is a parse error rather
//! than something that runs.
//!
//! ## Pattern Extraction Behind a Trait
//!
//! Metadata comes from regular expressions over the source text, not from a
//! TypeScript parser. The patterns sit behind [`extract::MetadataExtractor`],
//! so a syntax-aware extractor can replace them without touching the
//! pipeline.
//!
//! ## Idempotent Runs
//!
//! Existing pages are kept unless `--force` is given, navigation links are
//! unique by href, and the metadata manifest is only rewritten when its
//! content changes. Running `docs generate` twice writes nothing the second
//! time.

pub mod config;
pub mod exchange;
pub mod extract;
pub mod generate;
pub mod manager;
pub mod manifest;
pub mod naming;
pub mod nav;
pub mod output;
pub mod project;
pub mod scaffold;
pub mod scan;
pub mod staleness;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
