//! Markdown serialization (content tree → Markdown)
//!
//! A direct recursive walk: every node converts its children first, then
//! wraps the result according to its kind. Block kinds terminate themselves
//! with the newlines they need, so the root is a plain concatenation.

use crate::tree::{Content, ContentNode, ListType, TextFormat, TextNode};

/// Serialize post content to Markdown.
///
/// Legacy Markdown passes through unchanged; a tree without a root yields an
/// empty string. Never fails.
pub fn serialize_to_markdown(content: &Content) -> String {
    match content {
        Content::RawMarkdown(markdown) => markdown.clone(),
        Content::Tree(tree) => match &tree.root {
            Some(root) => convert_nodes(root.children()),
            None => String::new(),
        },
    }
}

/// Serialize a single node (and its subtree) to Markdown.
pub fn node_to_markdown(node: &ContentNode) -> String {
    match node {
        ContentNode::Paragraph { children } => convert_paragraph(children),
        ContentNode::Heading { tag, children } => convert_heading(tag.as_deref(), children),
        ContentNode::List {
            list_type,
            children,
        } => convert_list(*list_type, children),
        ContentNode::Link { url, children, .. } => convert_link(url.as_deref(), children),
        ContentNode::Text(text) => convert_text(text),
        ContentNode::LineBreak => "  \n".to_string(),
        ContentNode::Code { language, children } => convert_code(language.as_deref(), children),
        ContentNode::Quote { children } => convert_quote(children),
        ContentNode::Unknown { kind, children } => {
            tracing::debug!(kind = %kind, "no markdown rule for node kind, rendering children");
            convert_nodes(children)
        }
        // Root, list items and horizontal rules have no wrapper of their own.
        ContentNode::Root { children }
        | ContentNode::ListItem { children }
        | ContentNode::HorizontalRule { children } => convert_nodes(children),
    }
}

fn convert_nodes(nodes: &[ContentNode]) -> String {
    nodes.iter().map(node_to_markdown).collect()
}

fn convert_paragraph(children: &[ContentNode]) -> String {
    let content = convert_nodes(children);
    if content.trim().is_empty() {
        "\n".to_string()
    } else {
        format!("{content}\n\n")
    }
}

const MAX_HEADING_LEVEL: usize = 6;

fn convert_heading(tag: Option<&str>, children: &[ContentNode]) -> String {
    let hashes = "#".repeat(heading_level(tag));
    let content = convert_nodes(children);
    format!("{hashes} {}\n\n", content.trim())
}

/// Level from a tag like `"h3"`. Absent, unparsable or zero levels become 1;
/// anything deeper than Markdown's six levels becomes 6.
pub(crate) fn heading_level(tag: Option<&str>) -> usize {
    let Some(tag) = tag else {
        return 1;
    };
    let number = tag.replacen('h', "", 1);
    let digits: String = number
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<usize>() {
        Ok(0) | Err(_) => 1,
        Ok(level) => level.min(MAX_HEADING_LEVEL),
    }
}

fn convert_list(list_type: ListType, items: &[ContentNode]) -> String {
    let lines: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let content = convert_nodes(item.children());
            match list_type {
                ListType::Number => format!("{}. {}", index + 1, content.trim()),
                ListType::Bullet => format!("- {}", content.trim()),
            }
        })
        .collect();
    format!("{}\n\n", lines.join("\n"))
}

fn convert_link(url: Option<&str>, children: &[ContentNode]) -> String {
    let url = url.unwrap_or_default();
    let content = if children.is_empty() {
        url.to_string()
    } else {
        convert_nodes(children)
    };
    format!("[{}]({url})", content.trim())
}

/// Wrap text in Markdown delimiters for each set flag.
///
/// Applied in order bold, italic, strikethrough, code; each wraps the result
/// of the previous one. Underline has no Markdown form and is dropped.
pub fn convert_text(node: &TextNode) -> String {
    const DELIMITERS: [(TextFormat, &str); 4] = [
        (TextFormat::BOLD, "**"),
        (TextFormat::ITALIC, "*"),
        (TextFormat::STRIKETHROUGH, "~~"),
        (TextFormat::CODE, "`"),
    ];

    let mut text = node.text.clone();
    for (flag, delimiter) in DELIMITERS {
        if node.format.contains(flag) {
            text = format!("{delimiter}{text}{delimiter}");
        }
    }
    text
}

fn convert_code(language: Option<&str>, children: &[ContentNode]) -> String {
    let content = convert_nodes(children);
    let language = language.unwrap_or_default();
    format!("```{language}\n{}\n```\n\n", content.trim())
}

fn convert_quote(children: &[ContentNode]) -> String {
    let content = convert_nodes(children);
    let quoted: Vec<String> = content.split('\n').map(|line| format!("> {line}")).collect();
    format!("{}\n\n", quoted.join("\n"))
}
