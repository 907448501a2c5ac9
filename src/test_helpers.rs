//! Shared test utilities: a sample module descriptor and throwaway docs trees.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_docs(&[("alpha", Some("## Overview\nHi")), ("beta", None)]);
//! let config = test_config(tmp.path());
//! // docs under tmp/docs, pages written to tmp/site/docs
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::DocsConfig;
use crate::extract::README;
use crate::modules::ModuleDescriptor;

pub fn sample_module() -> ModuleDescriptor {
    ModuleDescriptor {
        id: "sample",
        title: "Sample Module",
        description: "A module used in tests.",
        icon: "fa-cube",
        category: "Testing",
    }
}

/// Create `docs/<id>/` folders in a temp directory.
///
/// `Some(text)` writes `text` as the folder's README, `None` leaves the
/// folder empty.
pub fn setup_docs(folders: &[(&str, Option<&str>)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (id, readme) in folders {
        let dir = tmp.path().join("docs").join(id);
        fs::create_dir_all(&dir).unwrap();
        if let Some(text) = readme {
            fs::write(dir.join(README), text).unwrap();
        }
    }
    tmp
}

/// Config rooted in a `setup_docs` directory.
pub fn test_config(root: &Path) -> DocsConfig {
    DocsConfig {
        docs_root: root.join("docs"),
        output_root: root.join("site").join("docs"),
        ..DocsConfig::default()
    }
}
