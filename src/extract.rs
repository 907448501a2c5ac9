//! Section extraction from a module's `README.md`.
//!
//! Each generated page has three content regions. Only the overview carries
//! text lifted from the source document; the other two report whether the
//! document mentions the topic at all:
//!
//! | Region   | Detection                                         | Content                      |
//! |----------|---------------------------------------------------|------------------------------|
//! | Overview | first `## Overview` up to the next `##`           | converted section, or fallback |
//! | Features | `## Key Features` or `### Features` anywhere      | fixed sentence (two variants) |
//! | API      | `API` or `ENDPOINT` anywhere, case-insensitive    | fixed sentence (two variants) |
//!
//! Extraction never fails. A missing README, an empty file and a file with
//! none of the markers all degrade to the fallback sentences.

use crate::markdown;
use maud::html;
use std::fs;
use std::io;
use std::path::Path;

pub const README: &str = "README.md";

const OVERVIEW_MARKER: &str = "## Overview";
const SECTION_MARKER: &str = "##";
const FEATURE_MARKERS: [&str; 2] = ["## Key Features", "### Features"];
const API_MARKERS: [&str; 2] = ["API", "ENDPOINT"];

pub const OVERVIEW_FALLBACK: &str = "Comprehensive documentation for this module is being prepared. \
Refer to the module source and its inline documentation for current details.";

pub const FEATURES_PRESENT: &str = "This module provides advanced features for building and operating \
the BPI ecosystem. See the module README for the complete feature list.";

pub const FEATURES_FALLBACK: &str = "This module is production-ready and integrates with the rest of \
the BPI ecosystem.";

pub const API_PRESENT: &str = "See the module README for complete API documentation, including \
endpoints and usage examples.";

pub const API_FALLBACK: &str = "API reference documentation for this module will be published in a \
future release.";

/// The three HTML fragments placed into a module page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    pub overview: String,
    pub features: String,
    pub api: String,
}

/// Read `README.md` from a module folder.
///
/// A missing file reads as an empty document. Any other failure is returned.
pub fn read_source_document(folder: &Path) -> io::Result<String> {
    match fs::read_to_string(folder.join(README)) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e),
    }
}

/// Extract all three page regions from a source document.
///
/// With `escape` set, the overview text is HTML-escaped before heading
/// conversion so document content cannot inject markup.
pub fn extract_content(document: &str, escape: bool) -> ExtractedContent {
    ExtractedContent {
        overview: extract_overview(document, escape),
        features: extract_features(document).to_string(),
        api: extract_api(document).to_string(),
    }
}

/// Locate the raw overview section, marker line included.
///
/// The section ends at the next `##` after the marker (which also stops it
/// at `###` subsections) or at end of text.
pub fn overview_section(document: &str) -> Option<&str> {
    let start = document.find(OVERVIEW_MARKER)?;
    let body_start = start + OVERVIEW_MARKER.len();
    let end = document[body_start..]
        .find(SECTION_MARKER)
        .map_or(document.len(), |i| body_start + i);
    Some(&document[start..end])
}

pub fn extract_overview(document: &str, escape: bool) -> String {
    match overview_section(document) {
        Some(section) if escape => markdown::to_html(&html! { (section) }.into_string()),
        Some(section) => markdown::to_html(section),
        None => OVERVIEW_FALLBACK.to_string(),
    }
}

pub fn extract_features(document: &str) -> &'static str {
    if FEATURE_MARKERS.iter().any(|m| document.contains(m)) {
        FEATURES_PRESENT
    } else {
        FEATURES_FALLBACK
    }
}

pub fn extract_api(document: &str) -> &'static str {
    let upper = document.to_uppercase();
    if API_MARKERS.iter().any(|m| upper.contains(m)) {
        API_PRESENT
    } else {
        API_FALLBACK
    }
}
