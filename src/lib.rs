//! # docpages
//!
//! Generates one static HTML page per documented module from a folder of
//! Markdown READMEs. The set of modules is a compiled-in table; each entry
//! names a folder under the docs root and carries the page's display
//! metadata.
//!
//! # Pipeline
//!
//! Each module goes through the same linear steps, independently of every
//! other module:
//!
//! ```text
//! modules table → read README.md → extract sections → render page → write index.html
//! ```
//!
//! A run always regenerates every page. There is no cache and no state
//! between runs, so unchanged inputs produce byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`modules`] | The static table of module descriptors |
//! | [`extract`] | Overview/Features/API extraction from a README, with fallback text |
//! | [`markdown`] | Heading and paragraph conversion for the extracted overview |
//! | [`render`] | The page shell, rendered with Maud |
//! | [`generate`] | The driver: per-module outcomes, directory creation, writes |
//! | [`config`] | Layered `docpages.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Not a Markdown Renderer
//!
//! Only the overview section is converted, and only headings and paragraphs
//! are recognised. Lists, links and emphasis pass through as written. The
//! pages are landing pages that point readers at the full README, not a
//! replacement for it.
//!
//! ## Trusted Input by Default
//!
//! Titles, descriptions and README text are inserted without escaping, so
//! documentation authors can use inline HTML. Setting `escape_html = true`
//! in `docpages.toml` switches to escaping for untrusted sources.
//!
//! ## Outcomes as Values
//!
//! The driver returns a [`generate::BuildSummary`] rather than only printing,
//! so skipped modules and written paths can be asserted on directly.

pub mod config;
pub mod extract;
pub mod generate;
pub mod markdown;
pub mod modules;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
