//! CLI output formatting.
//!
//! Every module is displayed by its 1-based table position and title, with
//! paths as secondary context:
//!
//! ## Build
//!
//! ```text
//! 001 BPI Core → website/docs/bpi-core/index.html
//! 002 BPCI Enterprise → skipped, source folder docs/bpci-enterprise not found
//! Generated 1 of 2 module pages (1 skipped)
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 BPI Core
//!     Source: docs/bpi-core/README.md
//! 002 BPCI Enterprise
//!     Missing: docs/bpci-enterprise/
//! Found 1 of 2 source folders
//! ```
//!
//! ## List
//!
//! ```text
//! 001 BPI Core (bpi-core)
//!     Category: Core Infrastructure
//!     Core node runtime: consensus, ledger, audit trail and the command-line interface.
//! ```
//!
//! Each view has a `format_*` function returning lines and a `print_*`
//! wrapper that writes them to stdout.

use crate::generate::{BuildSummary, ModuleOutcome, SkipReason, SourceStatus};
use crate::modules::ModuleDescriptor;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// One progress line for a processed module.
pub fn format_outcome(position: usize, outcome: &ModuleOutcome) -> String {
    match outcome {
        ModuleOutcome::Generated { title, path, .. } => format!(
            "{} {} \u{2192} {}",
            format_index(position),
            title,
            path.display()
        ),
        ModuleOutcome::Skipped {
            title,
            reason: SkipReason::MissingSourceFolder { path },
            ..
        } => format!(
            "{} {} \u{2192} skipped, source folder {} not found",
            format_index(position),
            title,
            path.display()
        ),
    }
}

pub fn format_summary(summary: &BuildSummary) -> String {
    let generated = summary.generated_count();
    let total = summary.outcomes.len();
    match summary.skipped_count() {
        0 => format!("Generated {} of {} module pages", generated, total),
        skipped => format!(
            "Generated {} of {} module pages ({} skipped)",
            generated, total, skipped
        ),
    }
}

/// All build lines: one per module, then the summary.
pub fn format_build_output(summary: &BuildSummary) -> Vec<String> {
    let mut lines: Vec<String> = summary
        .outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| format_outcome(i + 1, outcome))
        .collect();
    lines.push(format_summary(summary));
    lines
}

pub fn format_check_output(statuses: &[SourceStatus]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, status) in statuses.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), status.title));
        if !status.folder_present {
            lines.push(format!("    Missing: {}/", status.source_dir.display()));
        } else if status.readme_present {
            lines.push(format!(
                "    Source: {}",
                status.source_dir.join(crate::extract::README).display()
            ));
        } else {
            lines.push(format!(
                "    Source: {}/ (no README, fallback text)",
                status.source_dir.display()
            ));
        }
    }
    let found = statuses.iter().filter(|s| s.folder_present).count();
    lines.push(format!(
        "Found {} of {} source folders",
        found,
        statuses.len()
    ));
    lines
}

pub fn format_module_table(modules: &[ModuleDescriptor]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, module) in modules.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            module.title,
            module.id
        ));
        lines.push(format!("    Category: {}", module.category));
        lines.push(format!("    {}", module.description));
    }
    lines
}

/// Print a single progress line to stdout.
pub fn print_outcome(position: usize, outcome: &ModuleOutcome) {
    println!("{}", format_outcome(position, outcome));
}

pub fn print_summary(summary: &BuildSummary) {
    println!("{}", format_summary(summary));
}

pub fn print_check_output(statuses: &[SourceStatus]) {
    for line in format_check_output(statuses) {
        println!("{}", line);
    }
}

pub fn print_module_table(modules: &[ModuleDescriptor]) {
    for line in format_module_table(modules) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_module;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn generated(id: &'static str, title: &'static str) -> ModuleOutcome {
        ModuleOutcome::Generated {
            id,
            title,
            path: PathBuf::from(format!("out/{id}/index.html")),
        }
    }

    fn skipped(id: &'static str, title: &'static str) -> ModuleOutcome {
        ModuleOutcome::Skipped {
            id,
            title,
            reason: SkipReason::MissingSourceFolder {
                path: PathBuf::from(format!("docs/{id}")),
            },
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn generated_line_shows_path() {
        assert_eq!(
            format_outcome(1, &generated("core", "Core")),
            "001 Core \u{2192} out/core/index.html"
        );
    }

    #[test]
    fn skipped_line_is_a_warning() {
        assert_eq!(
            format_outcome(2, &skipped("os", "Immutable OS")),
            "002 Immutable OS \u{2192} skipped, source folder docs/os not found"
        );
    }

    #[test]
    fn build_output_ends_with_summary() {
        let summary = BuildSummary {
            outcomes: vec![generated("a", "A"), skipped("b", "B"), generated("c", "C")],
        };
        let lines = format_build_output(&summary);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("skipped"));
        assert_eq!(lines[3], "Generated 2 of 3 module pages (1 skipped)");
    }

    #[test]
    fn summary_without_skips() {
        let summary = BuildSummary {
            outcomes: vec![generated("a", "A")],
        };
        assert_eq!(format_summary(&summary), "Generated 1 of 1 module pages");
    }

    #[test]
    fn summary_of_empty_run() {
        assert_eq!(
            format_summary(&BuildSummary::default()),
            "Generated 0 of 0 module pages"
        );
    }

    #[test]
    fn check_output_distinguishes_states() {
        let statuses = vec![
            SourceStatus {
                id: "a",
                title: "A",
                source_dir: PathBuf::from("docs/a"),
                folder_present: true,
                readme_present: true,
            },
            SourceStatus {
                id: "b",
                title: "B",
                source_dir: PathBuf::from("docs/b"),
                folder_present: true,
                readme_present: false,
            },
            SourceStatus {
                id: "c",
                title: "C",
                source_dir: PathBuf::from("docs/c"),
                folder_present: false,
                readme_present: false,
            },
        ];
        let lines = format_check_output(&statuses);
        assert_eq!(
            lines,
            vec![
                "001 A",
                "    Source: docs/a/README.md",
                "002 B",
                "    Source: docs/b/ (no README, fallback text)",
                "003 C",
                "    Missing: docs/c/",
                "Found 2 of 3 source folders",
            ]
        );
    }

    #[test]
    fn module_table_lists_metadata() {
        let lines = format_module_table(&[sample_module()]);
        assert_eq!(
            lines,
            vec![
                "001 Sample Module (sample)",
                "    Category: Testing",
                "    A module used in tests.",
            ]
        );
    }
}
