//! Minimal Markdown-to-HTML conversion for extracted sections.
//!
//! This is deliberately not a Markdown parser. Only ATX headings of levels
//! one to three are recognised; everything else is grouped into paragraphs
//! and passed through as literal text:
//!
//! ```text
//! ## Overview                 <h2>Overview</h2>
//! This system does X.    →    <p>This system does X.</p>
//!
//! - lists stay literal        <p>- lists stay literal</p>
//! ```
//!
//! Paragraph boundaries are blank lines. A heading line always stands on its
//! own, even when it shares a block with ordinary text. A run of text that
//! already starts with a tag is emitted as-is.

use regex::Regex;
use std::sync::LazyLock;

static H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());
static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Convert a block of extracted Markdown text to an HTML fragment.
pub fn to_html(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    // Deepest level first so `### x` is never read as `## #x`.
    let text = H3.replace_all(&text, "<h3>${1}</h3>");
    let text = H2.replace_all(&text, "<h2>${1}</h2>");
    let text = H1.replace_all(&text, "<h1>${1}</h1>");

    let mut parts = Vec::new();
    for block in BLANK_LINES.split(&text) {
        push_block(block.trim(), &mut parts);
    }
    parts.join("\n")
}

fn is_heading(line: &str) -> bool {
    ["<h1>", "<h2>", "<h3>"].iter().any(|tag| line.starts_with(tag))
}

fn push_block(block: &str, parts: &mut Vec<String>) {
    let mut run: Vec<&str> = Vec::new();
    for line in block.lines().map(str::trim_end) {
        if is_heading(line) {
            flush_paragraph(&mut run, parts);
            parts.push(line.to_string());
        } else {
            run.push(line);
        }
    }
    flush_paragraph(&mut run, parts);
}

fn flush_paragraph(run: &mut Vec<&str>, parts: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }
    let joined = run.join("\n");
    run.clear();
    let joined = joined.trim();
    if joined.is_empty() {
        return;
    }
    if joined.starts_with('<') {
        parts.push(joined.to_string());
    } else {
        parts.push(format!("<p>{joined}</p>"));
    }
}
