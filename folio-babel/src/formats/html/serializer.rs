//! HTML serialization (content tree → HTML fragment)
//!
//! Produces an HTML fragment for embedding in a page template, not a complete
//! document. Children are converted first and then wrapped in the element for
//! the node's kind; text content and attribute values are escaped.

use super::legacy::render_legacy_markdown;
use super::HtmlOptions;
use crate::tree::{Content, ContentNode, TextFormat, TextNode};

/// Serialize post content to HTML.
///
/// Legacy Markdown is rendered by the Markdown renderer configured in
/// `options`; a tree without a root yields an empty string. Never fails.
pub fn serialize_to_html(content: &Content, options: &HtmlOptions) -> String {
    match content {
        Content::RawMarkdown(markdown) => render_legacy_markdown(markdown, &options.legacy),
        Content::Tree(tree) => tree.root.as_ref().map(node_to_html).unwrap_or_default(),
    }
}

/// Serialize a single node (and its subtree) to HTML.
pub fn node_to_html(node: &ContentNode) -> String {
    if let ContentNode::Text(text) = node {
        return convert_text(text);
    }

    let children: String = node.children().iter().map(node_to_html).collect();

    match node {
        ContentNode::Paragraph { .. } => format!("<p>{children}</p>"),
        ContentNode::Heading { tag, .. } => {
            let tag = tag.as_deref().unwrap_or("h2");
            format!("<{tag}>{children}</{tag}>")
        }
        ContentNode::List { list_type, .. } => {
            let tag = if list_type.is_ordered() { "ol" } else { "ul" };
            format!("<{tag}>{children}</{tag}>")
        }
        ContentNode::ListItem { .. } => format!("<li>{children}</li>"),
        ContentNode::Quote { .. } => format!("<blockquote>{children}</blockquote>"),
        ContentNode::Code { .. } => format!("<pre><code>{children}</code></pre>"),
        ContentNode::Link { url, new_tab, .. } => {
            let href = html_escape(url.as_deref().unwrap_or("#"));
            let target = if *new_tab {
                r#"target="_blank" rel="noopener noreferrer""#
            } else {
                ""
            };
            format!(r#"<a href="{href}" {target}>{children}</a>"#)
        }
        ContentNode::LineBreak => "<br>".to_string(),
        ContentNode::HorizontalRule { .. } => "<hr>".to_string(),
        ContentNode::Unknown { kind, .. } => {
            tracing::debug!(kind = %kind, "no html rule for node kind, rendering children");
            children
        }
        ContentNode::Root { .. } | ContentNode::Text(_) => children,
    }
}

/// Wrap escaped text in one element per set flag.
///
/// Applied in bit order bold, italic, strikethrough, underline, code, each
/// wrapping the previous result: bold ends up innermost, code outermost.
pub fn convert_text(node: &TextNode) -> String {
    const TAGS: [(TextFormat, &str); 5] = [
        (TextFormat::BOLD, "strong"),
        (TextFormat::ITALIC, "em"),
        (TextFormat::STRIKETHROUGH, "s"),
        (TextFormat::UNDERLINE, "u"),
        (TextFormat::CODE, "code"),
    ];

    let mut text = html_escape(&node.text);
    for (flag, tag) in TAGS {
        if node.format.contains(flag) {
            text = format!("<{tag}>{text}</{tag}>");
        }
    }
    text
}

/// Escape HTML special characters in text
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
