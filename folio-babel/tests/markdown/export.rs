//! Export tests for Markdown format (content tree → Markdown)

use crate::common::load_content;
use folio_babel::format::Format;
use folio_babel::formats::markdown::MarkdownFormat;
use folio_babel::{tree_to_markdown, Content};
use serde_json::json;

fn md(value: serde_json::Value) -> String {
    tree_to_markdown(&Content::from_json(&value))
}

fn root(children: serde_json::Value) -> serde_json::Value {
    json!({ "root": { "type": "root", "children": children } })
}

// ============================================================================
// BASIC ELEMENT TESTS
// ============================================================================

#[test]
fn test_heading_level_from_tag() {
    let out = md(root(json!([
        { "type": "heading", "tag": "h3", "children": [{ "type": "text", "text": "Title" }] }
    ])));
    assert_eq!(out, "### Title\n\n");
}

#[test]
fn test_heading_without_tag_is_level_one() {
    let out = md(root(json!([
        { "type": "heading", "children": [{ "type": "text", "text": " Padded " }] }
    ])));
    assert_eq!(out, "# Padded\n\n");
}

#[test]
fn test_numbered_list() {
    let out = md(root(json!([
        {
            "type": "list",
            "listType": "number",
            "children": [
                { "type": "listitem", "children": [{ "type": "text", "text": "a" }] },
                { "type": "listitem", "children": [{ "type": "text", "text": "b" }] }
            ]
        }
    ])));
    assert_eq!(out, "1. a\n2. b\n\n");
}

#[test]
fn test_bullet_list_keeps_empty_items() {
    let out = md(root(json!([
        {
            "type": "list",
            "listType": "bullet",
            "children": [
                { "type": "listitem", "children": [] },
                { "type": "listitem", "children": [{ "type": "text", "text": "x" }] }
            ]
        }
    ])));
    assert_eq!(out, "- \n- x\n\n");
}

#[test]
fn test_link_inside_paragraph() {
    let out = md(root(json!([
        {
            "type": "paragraph",
            "children": [{
                "type": "link",
                "url": "https://x.test",
                "children": [{ "type": "text", "text": "go" }]
            }]
        }
    ])));
    assert_eq!(out, "[go](https://x.test)\n\n");
}

#[test]
fn test_link_without_children_uses_url() {
    let out = md(root(json!([
        { "type": "paragraph", "children": [{ "type": "link", "fields": { "url": "https://x.test" } }] }
    ])));
    assert_eq!(out, "[https://x.test](https://x.test)\n\n");
}

#[test]
fn test_code_block_with_language() {
    let out = md(root(json!([
        { "type": "code", "language": "js", "children": [{ "type": "text", "text": "let a = 1;\n" }] }
    ])));
    assert_eq!(out, "```js\nlet a = 1;\n```\n\n");
}

#[test]
fn test_quote_prefixes_every_line() {
    let out = md(root(json!([
        {
            "type": "quote",
            "children": [
                { "type": "text", "text": "one" },
                { "type": "linebreak" },
                { "type": "text", "text": "two" }
            ]
        }
    ])));
    assert_eq!(out, "> one  \n> two\n\n");
}

#[test]
fn test_underline_is_dropped() {
    let out = md(root(json!([
        { "type": "paragraph", "children": [{ "type": "text", "text": "u", "format": 8 }] }
    ])));
    assert_eq!(out, "u\n\n");
}

#[test]
fn test_all_flags_nest_bold_innermost() {
    let out = md(root(json!([
        { "type": "paragraph", "children": [{ "type": "text", "text": "x", "format": 31 }] }
    ])));
    assert_eq!(out, "`~~***x***~~`\n\n");
}

// ============================================================================
// DEGENERATE INPUT
// ============================================================================

#[test]
fn test_empty_inputs_yield_empty_string() {
    assert_eq!(md(json!(null)), "");
    assert_eq!(md(json!({})), "");
    assert_eq!(md(json!({ "root": null })), "");
    assert_eq!(md(json!(42)), "");
    assert_eq!(md(root(json!([]))), "");
}

#[test]
fn test_legacy_markdown_passes_through() {
    let legacy = "# Title\n\nAlready *markdown*, kept byte for byte.  \n";
    assert_eq!(md(json!(legacy)), legacy);
}

#[test]
fn test_unknown_kinds_render_children() {
    let out = tree_to_markdown(&load_content("unknown-kinds.json"));
    assert_eq!(out, "*kept*\n\ninside\n\n");
}

// ============================================================================
// KITCHENSINK
// ============================================================================

#[test]
fn test_kitchensink() {
    let out = tree_to_markdown(&load_content("kitchensink.json"));
    assert_eq!(
        out,
        "# Kitchen Sink\n\n\
         Plain, **bold** and ***both***.\n\n\
         - First\n- Second\n\n\
         > Quoted  \n> lines\n\n\
         ```rust\nfn main() {}\n```\n\n\
         See [docs](https://example.com/a?b=1&c=2)\n\n\
         \n"
    );
}

#[test]
fn test_format_matches_free_function() {
    let content = load_content("kitchensink.json");
    assert_eq!(
        MarkdownFormat.serialize(&content).unwrap(),
        tree_to_markdown(&content)
    );
}
