//! Generator configuration.
//!
//! Settings are layered, later layers winning:
//!
//! ```text
//! stock defaults  →  docpages.toml  →  DOCPAGES_* env vars  →  CLI flags
//! ```
//!
//! The file layer is a sparse TOML table merged on top of the stock defaults,
//! so a config file only needs the keys it changes. The env and flag layers
//! are handled by clap and applied through [`DocsConfig::with_overrides`].
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! docs_root = "docs"             # Folder holding one subfolder per module
//! output_root = "website/docs"   # Pages go to <output_root>/<module>/<page_filename>
//! page_filename = "index.html"
//! site_name = "BPI Ecosystem"    # Navigation bar, page titles and footer
//! escape_html = false            # Escape module titles and README content
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "docpages.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Fully resolved generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Folder containing one documentation folder per module.
    pub docs_root: PathBuf,
    /// Folder receiving one output directory per generated module.
    pub output_root: PathBuf,
    /// File name written inside each module's output directory.
    pub page_filename: String,
    /// Site name shown in the navigation bar, page titles and footer.
    pub site_name: String,
    /// Escape module metadata and README text instead of inserting it raw.
    pub escape_html: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            docs_root: PathBuf::from("docs"),
            output_root: PathBuf::from("website/docs"),
            page_filename: "index.html".to_string(),
            site_name: "BPI Ecosystem".to_string(),
            escape_html: false,
        }
    }
}

impl DocsConfig {
    /// Validate paths and file names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.docs_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation("docs_root must not be empty".into()));
        }
        if self.output_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_root must not be empty".into(),
            ));
        }
        let name = self.page_filename.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "page_filename must be a plain file name, got {name:?}"
            )));
        }
        Ok(())
    }

    /// Apply env/CLI path overrides on top of the file-resolved config.
    pub fn with_overrides(mut self, docs_root: Option<PathBuf>, output_root: Option<PathBuf>) -> Self {
        if let Some(path) = docs_root {
            self.docs_root = path;
        }
        if let Some(path) = output_root {
            self.output_root = path;
        }
        self
    }
}

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(DocsConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value, `Ok(None)` if it does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    debug!(path = %path.display(), "loaded config file");
    Ok(Some(value))
}

/// Merge an optional overlay onto the base, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<DocsConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: DocsConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path` on top of the stock defaults.
///
/// A missing file yields the defaults unless `required` is set, which is
/// the case when the user named the file explicitly.
pub fn load_config(path: &Path, required: bool) -> Result<DocsConfig, ConfigError> {
    let overlay = load_raw_config(path)?;
    if overlay.is_none() && required {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `docpages.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docpages configuration
# ======================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.
#
# Paths may also be set with DOCPAGES_DOCS_ROOT / DOCPAGES_OUTPUT or the
# --docs-root / --output flags, which take precedence over this file.

# Folder holding one documentation folder per module, each with an
# optional README.md.
docs_root = "docs"

# Folder receiving the generated pages. Each module gets
# <output_root>/<module>/<page_filename>. Pages link to assets two levels
# up, so this folder should sit one level below the website root.
output_root = "website/docs"

# File written inside each module's output directory.
page_filename = "index.html"

# Shown in the navigation bar, page titles and footer.
site_name = "BPI Ecosystem"

# Escape module titles, descriptions and README text. Off by default:
# documentation is trusted and may contain inline HTML.
escape_html = false
"##
}
