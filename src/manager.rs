//! Documentation manager: drives one command from inventory to manifests.
//!
//! A manager can only be built from a loaded [`Project`], so every operation
//! starts with the configuration and application short name already
//! resolved. Each public operation then runs to completion or returns one
//! [`DocsError`]:
//!
//! - [`list_components`](DocumentationManager::list_components): inventory of
//!   all component files, with or without metadata
//! - [`generate_documentation`](DocumentationManager::generate_documentation):
//!   pages, navigation links, and metadata manifest for all (or one) documented
//!   components
//! - [`check_if_documentation_needs_update`](DocumentationManager::check_if_documentation_needs_update):
//!   staleness of one component's page
//!
//! ## Generation order
//!
//! Components are processed one at a time in inventory order. For each one
//! the page is written (subject to `--force`) and, if it was written, its
//! navigation link is added. After the batch, the metadata manifest is merged
//! once for every component whose page step succeeded, even if its
//! navigation update failed afterwards.
//!
//! Two components whose suggested filenames map to the same folder share one
//! page. A page written earlier in the same run does not count as existing,
//! so the later component in inventory order overwrites it.
//!
//! A failure on one component is reported and the batch carries on; earlier
//! writes are not rolled back. The operation still ends in an error so the
//! process exits non-zero.
//!
//! ## Idempotence
//!
//! With `--force` unset, a second run over unchanged sources writes nothing:
//! existing pages are skipped, navigation links are not touched, and the
//! metadata manifest is only rewritten when its content would change.

use crate::config::ConfigError;
use crate::exchange::ExchangeError;
use crate::extract::{MetadataExtractor, PatternExtractor};
use crate::generate::{self, GenerateError, PageOutcome};
use crate::manifest::{self, ManifestError, SaveOutcome};
use crate::nav::{self, NavError, NavUpdate};
use crate::output::Reporter;
use crate::project::Project;
use crate::scaffold::ScaffoldError;
use crate::scan::{self, ScanError};
use crate::staleness::{self, StalenessError, UpdateStatus};
use crate::types::{ComponentInfo, ComponentMetadata, NavLink};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Failed to check if documentation needs update: {0}")]
    Staleness(#[from] StalenessError),
    #[error("{0}")]
    Generate(#[from] GenerateError),
    #[error("{0}")]
    Nav(#[from] NavError),
    #[error("{0}")]
    Manifest(#[from] ManifestError),
    #[error("{0}")]
    Scaffold(#[from] ScaffoldError),
    #[error("{0}")]
    Exchange(#[from] ExchangeError),
    #[error("Component \"{0}\" not found.")]
    ComponentNotFound(String),
    #[error("Documentation failed for {failed} of {total} component(s)")]
    Incomplete { failed: usize, total: usize },
}

/// Flags shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Report advisory messages at info level.
    pub verbose: bool,
    /// Overwrite existing documentation pages.
    pub force: bool,
}

/// Per-outcome counts of a generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub created: usize,
    pub overwritten: usize,
    pub skipped: usize,
    /// Page could not be written.
    pub failed: usize,
    /// Page written, navigation update failed.
    pub nav_failed: usize,
}

impl GenerationSummary {
    /// Components whose page step completed, written or skipped.
    pub fn succeeded(&self) -> usize {
        self.created + self.overwritten + self.skipped
    }

    fn record(&mut self, outcome: &PageOutcome) {
        match outcome {
            PageOutcome::Created(_) => self.created += 1,
            PageOutcome::Overwritten(_) => self.overwritten += 1,
            PageOutcome::Skipped(_) => self.skipped += 1,
        }
    }
}

pub struct DocumentationManager<'p, 'r> {
    project: &'p Project,
    options: RunOptions,
    extractor: Box<dyn MetadataExtractor>,
    reporter: &'r mut dyn Reporter,
}

impl<'p, 'r> DocumentationManager<'p, 'r> {
    pub fn new(project: &'p Project, options: RunOptions, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            project,
            options,
            extractor: Box::new(PatternExtractor),
            reporter,
        }
    }

    /// Replace the metadata extractor.
    pub fn with_extractor(mut self, extractor: impl MetadataExtractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    pub fn project(&self) -> &Project {
        self.project
    }

    /// Advisory message, shown only with `--verbose`.
    fn note(&mut self, message: &str) {
        if self.options.verbose {
            self.reporter.info(message);
        }
    }

    /// Inventory of every component file, including those without metadata.
    pub fn list_components(&mut self) -> Result<Vec<ComponentInfo>, DocsError> {
        let dir = self.project.components_dir();
        if !dir.is_dir() {
            self.reporter
                .warn(&format!("Components directory not found: {}", dir.display()));
        }
        let inventory = scan::scan(self.project, self.extractor.as_ref())?;
        tracing::debug!(count = inventory.len(), "inventory built");
        Ok(inventory)
    }

    /// Generate documentation for every documented component, or only the
    /// one whose display name equals `component`.
    pub fn generate_documentation(
        &mut self,
        component: Option<&str>,
    ) -> Result<GenerationSummary, DocsError> {
        let inventory = self.list_components()?;
        let mut selected: Vec<(ComponentMetadata, String)> = inventory
            .into_iter()
            .filter_map(|c| c.metadata.map(|meta| (meta, c.file.filename)))
            .collect();

        if let Some(name) = component {
            selected.retain(|(meta, _)| meta.display_name == name);
            if selected.is_empty() {
                return Err(DocsError::ComponentNotFound(name.to_string()));
            }
        }

        let mut summary = GenerationSummary::default();
        let mut processed = Vec::with_capacity(selected.len());
        let mut written_this_run = HashSet::new();
        for (meta, filename) in &selected {
            // A page written earlier in this run belongs to a colliding
            // component; the later one replaces it.
            let force =
                self.options.force || written_this_run.contains(&self.project.doc_page_path(meta));
            let outcome = match generate::write_page(self.project, meta, filename, force) {
                Ok(outcome) => outcome,
                Err(e) => {
                    self.report_failure(meta, &DocsError::from(e));
                    summary.failed += 1;
                    continue;
                }
            };
            summary.record(&outcome);
            processed.push(meta.clone());

            if !outcome.written() {
                self.note(&format!(
                    "Documentation already exists for {}. Use --force to overwrite.",
                    meta.display_name
                ));
                continue;
            }
            self.note(&format!("Documentation created for {}", meta.display_name));
            written_this_run.insert(outcome.path().clone());
            if let Err(e) = self.update_nav_links(meta) {
                self.report_failure(meta, &e);
                summary.nav_failed += 1;
            }
        }

        self.update_metadata_file(&processed)?;
        self.reporter.success(&format!(
            "Documentation generated for {} component(s).",
            summary.succeeded()
        ));

        let failed = summary.failed + summary.nav_failed;
        if failed > 0 {
            return Err(DocsError::Incomplete {
                failed,
                total: selected.len(),
            });
        }
        Ok(summary)
    }

    fn report_failure(&mut self, meta: &ComponentMetadata, error: &DocsError) {
        tracing::warn!(component = %meta.display_name, error = %error, "generation failed");
        self.reporter.error(&format!(
            "Failed to generate documentation for {}: {}",
            meta.display_name, error
        ));
    }

    fn update_nav_links(&mut self, meta: &ComponentMetadata) -> Result<NavUpdate, DocsError> {
        let link = NavLink {
            href: self.project.nav_href(meta),
            label: meta.display_name.clone(),
        };
        let update = nav::add_link(&self.project.nav_manifest_path(), link)?;
        match update {
            NavUpdate::Added => self.note(&format!(
                "Updated navigation manifest with {}",
                meta.display_name
            )),
            NavUpdate::AlreadyExists => self.note(&format!(
                "{} already exists in navigation manifest",
                meta.display_name
            )),
        }
        Ok(update)
    }

    fn update_metadata_file(&mut self, components: &[ComponentMetadata]) -> Result<(), DocsError> {
        let path = self.project.metadata_manifest_path();
        match manifest::update_metadata_file(&path, components)? {
            SaveOutcome::Written => self.note("Metadata file updated"),
            SaveOutcome::Unchanged => self.note("Metadata file already up to date"),
        }
        Ok(())
    }

    /// Report and return whether a component's page needs regeneration.
    ///
    /// `component_name` is the component's source file name, with or without
    /// extension.
    pub fn check_if_documentation_needs_update(
        &mut self,
        component_name: &str,
    ) -> Result<UpdateStatus, DocsError> {
        let status =
            staleness::check_staleness(self.project, self.extractor.as_ref(), component_name)?;
        if status.needs_update() {
            self.reporter.warn(&format!(
                "Documentation for {} needs updating ({}).",
                component_name, status
            ));
        } else {
            if status == UpdateStatus::NoMetadata {
                self.note(&format!(
                    "{} declares no documentation metadata",
                    component_name
                ));
            }
            self.reporter.success(&format!(
                "Documentation for {} is up to date.",
                component_name
            ));
        }
        Ok(status)
    }
}
