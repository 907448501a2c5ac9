//! Module page rendering.
//!
//! Every module page shares one fixed shell:
//!
//! ```text
//! nav.site-nav        Home · Documentation · Modules
//! header.hero         icon, title, description, category + "Documentation" badges
//! main.docs-content   Overview / Key Features / API Reference sections
//! footer.site-footer
//! ```
//!
//! Pages are written to `<output_root>/<module>/index.html` and the website
//! keeps its assets two levels above that, so every asset and navigation link
//! is relative to [`SITE_ROOT`].
//!
//! ## Escaping
//!
//! Extracted fragments are already HTML and are always inserted raw. Module
//! titles and descriptions are inserted raw too unless
//! [`PageOptions::escape_html`] is set, in which case maud escapes them.

use crate::extract::ExtractedContent;
use crate::modules::ModuleDescriptor;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Relative path from a module page back to the website root.
pub const SITE_ROOT: &str = "../..";

/// Page-wide settings that do not vary per module.
#[derive(Debug, Clone, Copy)]
pub struct PageOptions<'a> {
    /// Shown in the navigation bar, page title and footer.
    pub site_name: &'a str,
    pub escape_html: bool,
}

fn text(value: &str, escape: bool) -> Markup {
    if escape {
        html! { (value) }
    } else {
        PreEscaped(value.to_string())
    }
}

/// Render the complete HTML document for one module.
pub fn render_page(
    module: &ModuleDescriptor,
    content: &ExtractedContent,
    options: &PageOptions,
) -> Markup {
    let title = text(module.title, options.escape_html);
    let description = text(module.description, options.escape_html);
    let site_name = text(options.site_name, options.escape_html);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) " - " (site_name) }
                link rel="stylesheet" href={ (SITE_ROOT) "/assets/css/main.css" };
                link rel="stylesheet" href={ (SITE_ROOT) "/assets/css/docs.css" };
            }
            body.module-page data-module=(module.id) {
                (site_nav(&site_name))
                (hero(module, &title, &description))
                main.docs-content {
                    (section("overview", "Overview", "fa-info-circle", &content.overview))
                    (section("features", "Key Features", "fa-star", &content.features))
                    (section("api", "API Reference", "fa-code", &content.api))
                }
                (site_footer(&site_name))
                script src={ (SITE_ROOT) "/assets/js/main.js" } {}
            }
        }
    }
}

fn site_nav(site_name: &Markup) -> Markup {
    html! {
        nav.site-nav {
            a.brand href={ (SITE_ROOT) "/index.html" } { (site_name) }
            ul.nav-links {
                li { a href={ (SITE_ROOT) "/index.html" } { "Home" } }
                li.current { a href="../index.html" { "Documentation" } }
                li { a href="../index.html#modules" { "Modules" } }
            }
        }
    }
}

fn hero(module: &ModuleDescriptor, title: &Markup, description: &Markup) -> Markup {
    html! {
        header.hero {
            div.hero-icon { i class={ "fas " (module.icon) } {} }
            h1.hero-title { (title) }
            p.hero-description { (description) }
            div.hero-badges {
                span.badge.badge-category { (module.category) }
                span.badge.badge-docs { "Documentation" }
            }
        }
    }
}

fn section(id: &str, heading: &str, icon: &str, fragment: &str) -> Markup {
    html! {
        section.docs-section id=(id) {
            h2.section-title {
                i class={ "fas " (icon) } {}
                " "
                (heading)
            }
            div.section-content {
                (PreEscaped(fragment))
            }
        }
    }
}

fn site_footer(site_name: &Markup) -> Markup {
    html! {
        footer.site-footer {
            p { "© " (site_name) ". Generated from module documentation." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{self, extract_content};
    use crate::test_helpers::sample_module;

    fn options(escape_html: bool) -> PageOptions<'static> {
        PageOptions {
            site_name: "BPI Ecosystem",
            escape_html,
        }
    }

    fn render(module: &ModuleDescriptor, doc: &str, escape: bool) -> String {
        let content = extract_content(doc, escape);
        render_page(module, &content, &options(escape)).into_string()
    }

    #[test]
    fn page_starts_with_doctype() {
        let html = render(&sample_module(), "", false);
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn page_title_and_hero() {
        let html = render(&sample_module(), "", false);
        assert!(html.contains("<title>Sample Module - BPI Ecosystem</title>"));
        assert!(html.contains(r#"<h1 class="hero-title">Sample Module</h1>"#));
        assert!(html.contains("A module used in tests."));
        assert!(html.contains(r#"class="fas fa-cube""#));
    }

    #[test]
    fn badges_show_category() {
        let html = render(&sample_module(), "", false);
        assert!(html.contains(r#"<span class="badge badge-category">Testing</span>"#));
        assert!(html.contains("badge-docs"));
    }

    #[test]
    fn assets_are_two_levels_up() {
        let html = render(&sample_module(), "", false);
        assert!(html.contains(r#"href="../../assets/css/main.css""#));
        assert!(html.contains(r#"href="../../assets/css/docs.css""#));
        assert!(html.contains(r#"src="../../assets/js/main.js""#));
    }

    #[test]
    fn three_sections_in_order() {
        let html = render(&sample_module(), "", false);
        let overview = html.find(r#"id="overview""#).unwrap();
        let features = html.find(r#"id="features""#).unwrap();
        let api = html.find(r#"id="api""#).unwrap();
        assert!(overview < features && features < api);
    }

    #[test]
    fn fallback_sentences_in_sections() {
        let html = render(&sample_module(), "", false);
        assert!(html.contains(extract::OVERVIEW_FALLBACK));
        assert!(html.contains(extract::FEATURES_FALLBACK));
        assert!(html.contains(extract::API_FALLBACK));
    }

    #[test]
    fn extracted_overview_inserted_as_html() {
        let html = render(&sample_module(), "## Overview\nThis system does X.\n\n## Other", false);
        assert!(html.contains("<h2>Overview</h2>\n<p>This system does X.</p>"));
    }

    #[test]
    fn title_inserted_verbatim_by_default() {
        let mut module = sample_module();
        module.title = "<em>Raw</em> & Co";
        let html = render(&module, "", false);
        assert!(html.contains(r#"<h1 class="hero-title"><em>Raw</em> & Co</h1>"#));
    }

    #[test]
    fn title_escaped_when_enabled() {
        let mut module = sample_module();
        module.title = "<em>Raw</em> & Co";
        let html = render(&module, "", true);
        assert!(html.contains("&lt;em&gt;Raw&lt;/em&gt; &amp; Co"));
        assert!(!html.contains("<em>Raw</em>"));
    }

    #[test]
    fn module_id_on_body() {
        let html = render(&sample_module(), "", false);
        assert!(html.contains(r#"data-module="sample""#));
    }

    #[test]
    fn rendering_is_deterministic() {
        let doc = "## Overview\nA.\n\n## Key Features\n- b\n\nendpoint";
        assert_eq!(
            render(&sample_module(), doc, false),
            render(&sample_module(), doc, false)
        );
    }
}
