//! Legacy Markdown content rendered to HTML

use folio_babel::{tree_to_html, tree_to_html_with_options, Content, FormatRegistry};
use folio_babel::{HtmlOptions, LegacyMarkdownOptions};
use std::collections::HashMap;

#[test]
fn test_legacy_string_is_rendered_as_markdown() {
    let content = Content::from_json(&serde_json::json!("## Routing\n\nPages in `pages/` are routes.\n"));
    assert_eq!(
        tree_to_html(&content),
        "<h2>Routing</h2>\n<p>Pages in <code>pages/</code> are routes.</p>\n"
    );
}

#[test]
fn test_legacy_tables_follow_options() {
    let content = Content::markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(tree_to_html(&content).contains("<table>"));

    let options = HtmlOptions::new(LegacyMarkdownOptions {
        tables: false,
        ..Default::default()
    });
    assert!(!tree_to_html_with_options(&content, &options).contains("<table>"));
}

#[test]
fn test_registry_extra_params_reach_legacy_renderer() {
    let registry = FormatRegistry::default();
    let content = Content::markdown("<div>raw</div>\n");

    let safe = registry.serialize(&content, "html").unwrap();
    assert!(!safe.contains("<div>"));

    let mut params = HashMap::new();
    params.insert("raw-html".to_string(), "true".to_string());
    let raw = registry
        .serialize_with_options(&content, "html", &params)
        .unwrap();
    assert!(raw.contains("<div>raw</div>"));
}
