//! Export tests for HTML format (content tree → HTML)

use crate::common::load_content;
use folio_babel::format::Format;
use folio_babel::formats::html::HtmlFormat;
use folio_babel::{tree_to_html, Content};
use insta::assert_snapshot;
use serde_json::json;

fn html(value: serde_json::Value) -> String {
    tree_to_html(&Content::from_json(&value))
}

fn root(children: serde_json::Value) -> serde_json::Value {
    json!({ "root": { "type": "root", "children": children } })
}

// ============================================================================
// BASIC ELEMENT TESTS
// ============================================================================

#[test]
fn test_heading_uses_tag() {
    let out = html(root(json!([
        { "type": "heading", "tag": "h3", "children": [{ "type": "text", "text": "Title" }] }
    ])));
    assert_eq!(out, "<h3>Title</h3>");
}

#[test]
fn test_heading_defaults_to_h2() {
    let out = html(root(json!([
        { "type": "heading", "children": [{ "type": "text", "text": "Title" }] }
    ])));
    assert_eq!(out, "<h2>Title</h2>");
}

#[test]
fn test_numbered_list() {
    let out = html(root(json!([
        {
            "type": "list",
            "listType": "number",
            "children": [
                { "type": "listitem", "children": [{ "type": "text", "text": "a" }] },
                { "type": "listitem", "children": [{ "type": "text", "text": "b" }] }
            ]
        }
    ])));
    assert_eq!(out, "<ol><li>a</li><li>b</li></ol>");
}

#[test]
fn test_link_without_new_tab() {
    let out = html(root(json!([
        {
            "type": "link",
            "url": "https://x.test",
            "children": [{ "type": "text", "text": "go" }]
        }
    ])));
    assert_eq!(out, r#"<a href="https://x.test" >go</a>"#);
}

#[test]
fn test_link_new_tab_from_fields() {
    let out = html(root(json!([
        {
            "type": "link",
            "fields": { "url": "/about", "newTab": true },
            "children": [{ "type": "text", "text": "About" }]
        }
    ])));
    assert_snapshot!(out, @r#"<a href="/about" target="_blank" rel="noopener noreferrer">About</a>"#);
}

#[test]
fn test_link_without_url_points_to_hash() {
    let out = html(root(json!([
        { "type": "link", "children": [{ "type": "text", "text": "nowhere" }] }
    ])));
    assert_eq!(out, r##"<a href="#" >nowhere</a>"##);
}

#[test]
fn test_formatted_text_nests_bold_innermost() {
    let out = html(root(json!([
        { "type": "paragraph", "children": [{ "type": "text", "text": "x", "format": 31 }] }
    ])));
    assert_snapshot!(out, @"<p><code><u><s><em><strong>x</strong></em></s></u></code></p>");
}

#[test]
fn test_text_is_escaped() {
    let out = html(root(json!([
        { "type": "paragraph", "children": [{ "type": "text", "text": "<script>\"a\" & b</script>" }] }
    ])));
    assert_eq!(out, "<p>&lt;script&gt;&quot;a&quot; &amp; b&lt;/script&gt;</p>");
}

#[test]
fn test_void_elements() {
    let out = html(root(json!([
        { "type": "paragraph", "children": [
            { "type": "text", "text": "a" },
            { "type": "linebreak" },
            { "type": "text", "text": "b" }
        ] },
        { "type": "horizontalrule" }
    ])));
    assert_eq!(out, "<p>a<br>b</p><hr>");
}

// ============================================================================
// DEGENERATE INPUT
// ============================================================================

#[test]
fn test_empty_inputs_yield_empty_string() {
    assert_eq!(html(json!(null)), "");
    assert_eq!(html(json!({})), "");
    assert_eq!(html(json!([1, 2, 3])), "");
    assert_eq!(html(root(json!([]))), "");
}

#[test]
fn test_unknown_kinds_render_children() {
    let out = tree_to_html(&load_content("unknown-kinds.json"));
    assert_eq!(out, "<p><em>kept</em></p><p>inside</p>");
}

// ============================================================================
// KITCHENSINK
// ============================================================================

#[test]
fn test_kitchensink() {
    let out = tree_to_html(&load_content("kitchensink.json"));
    assert_snapshot!(out, @r#"<h1>Kitchen Sink</h1><p>Plain, <strong>bold</strong> and <em><strong>both</strong></em>.</p><ul><li>First</li><li>Second</li></ul><blockquote>Quoted<br>lines</blockquote><pre><code>fn main() {}</code></pre><p>See <a href="https://example.com/a?b=1&amp;c=2" target="_blank" rel="noopener noreferrer">docs</a></p><hr><p></p>"#);
}

#[test]
fn test_format_matches_free_function() {
    let content = load_content("kitchensink.json");
    assert_eq!(
        HtmlFormat::default().serialize(&content).unwrap(),
        tree_to_html(&content)
    );
}
