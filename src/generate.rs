//! The page generation driver.
//!
//! Walks the module table in order and, for every module whose source folder
//! exists, reads its README, extracts the three page regions, renders the
//! page and writes it:
//!
//! ```text
//! <docs_root>/<id>/README.md  →  extract  →  render  →  <output_root>/<id>/index.html
//! ```
//!
//! Modules are independent. A missing source folder is an expected outcome:
//! the module is recorded as skipped and the run carries on. Filesystem
//! failures while reading or writing abort the run immediately; pages written
//! before the failure are left in place.
//!
//! Outcomes are returned as values ([`BuildSummary`]) and also reported
//! through a progress callback as they happen, so the CLI can print lines
//! while tests inspect the summary directly.

use crate::config::DocsConfig;
use crate::extract;
use crate::modules::{MODULES, ModuleDescriptor};
use crate::render::{self, PageOptions};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a module produced no page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    MissingSourceFolder { path: PathBuf },
}

/// Result of processing one table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModuleOutcome {
    Generated {
        id: &'static str,
        title: &'static str,
        path: PathBuf,
    },
    Skipped {
        id: &'static str,
        title: &'static str,
        reason: SkipReason,
    },
}

impl ModuleOutcome {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Generated { id, .. } | Self::Skipped { id, .. } => *id,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }
}

/// Outcomes of a full run, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub outcomes: Vec<ModuleOutcome>,
}

impl BuildSummary {
    pub fn generated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_generated()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.generated_count()
    }
}

/// Source availability for one module, as reported by `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceStatus {
    pub id: &'static str,
    pub title: &'static str,
    pub source_dir: PathBuf,
    pub folder_present: bool,
    pub readme_present: bool,
}

/// Generate pages for the compiled-in module table.
pub fn generate_all(
    config: &DocsConfig,
    progress: impl FnMut(usize, &ModuleOutcome),
) -> Result<BuildSummary, GenerateError> {
    generate(config, MODULES, progress)
}

/// Generate one page per module with a source folder.
///
/// `progress` is called after each module with its 1-based position and
/// outcome.
pub fn generate(
    config: &DocsConfig,
    modules: &[ModuleDescriptor],
    mut progress: impl FnMut(usize, &ModuleOutcome),
) -> Result<BuildSummary, GenerateError> {
    let options = PageOptions {
        site_name: &config.site_name,
        escape_html: config.escape_html,
    };

    let mut outcomes = Vec::with_capacity(modules.len());
    for (idx, module) in modules.iter().enumerate() {
        let outcome = generate_module(config, module, &options)?;
        progress(idx + 1, &outcome);
        outcomes.push(outcome);
    }

    info!(
        generated = outcomes.iter().filter(|o| o.is_generated()).count(),
        total = outcomes.len(),
        "generation finished"
    );
    Ok(BuildSummary { outcomes })
}

fn generate_module(
    config: &DocsConfig,
    module: &ModuleDescriptor,
    options: &PageOptions,
) -> Result<ModuleOutcome, GenerateError> {
    let source_dir = config.docs_root.join(module.id);
    if !source_dir.is_dir() {
        warn!(module = module.id, path = %source_dir.display(), "source folder not found, skipping");
        return Ok(ModuleOutcome::Skipped {
            id: module.id,
            title: module.title,
            reason: SkipReason::MissingSourceFolder { path: source_dir },
        });
    }

    let document =
        extract::read_source_document(&source_dir).map_err(|source| GenerateError::Read {
            path: source_dir.join(extract::README),
            source,
        })?;
    let content = extract::extract_content(&document, config.escape_html);
    let page = render::render_page(module, &content, options);

    let out_dir = config.output_root.join(module.id);
    fs::create_dir_all(&out_dir).map_err(|source| GenerateError::CreateDir {
        path: out_dir.clone(),
        source,
    })?;
    let out_path = out_dir.join(&config.page_filename);
    fs::write(&out_path, page.into_string()).map_err(|source| GenerateError::Write {
        path: out_path.clone(),
        source,
    })?;

    info!(module = module.id, path = %out_path.display(), "generated page");
    Ok(ModuleOutcome::Generated {
        id: module.id,
        title: module.title,
        path: out_path,
    })
}

/// Report which modules have source folders and READMEs. Writes nothing.
pub fn check(config: &DocsConfig, modules: &[ModuleDescriptor]) -> Vec<SourceStatus> {
    modules
        .iter()
        .map(|module| {
            let source_dir = config.docs_root.join(module.id);
            SourceStatus {
                id: module.id,
                title: module.title,
                folder_present: source_dir.is_dir(),
                readme_present: source_dir.join(extract::README).is_file(),
                source_dir,
            }
        })
        .collect()
}
