//! Decoding editor JSON into the content tree
//!
//! Stored posts come from a document database where the content field is
//! untyped, so these conversions are total: a field with an unexpected shape
//! decays to its default instead of failing the whole document.
//!
//! | JSON                                  | Result                                  |
//! |---------------------------------------|-----------------------------------------|
//! | string                                | `Content::RawMarkdown`                  |
//! | object with an object `root`          | `Content::Tree` with that root          |
//! | anything else (null, `{}`, numbers)   | `Content::Tree` without a root          |
//! | node with unrecognized/missing `type` | `ContentNode::Unknown`, children kept   |
//! | non-string `text`                     | empty text                              |
//! | non-numeric `format`                  | no flags (numbers wrap to 32 bits)      |
//! | non-array `children`                  | no children                             |
//!
//! Link attributes are read from the node's `fields` object first, which is
//! where the CMS editor nests them, and then from the node itself.

use super::{Content, ContentNode, ContentTree, ListType, TextFormat, TextNode};
use serde_json::{Map, Value};

impl Content {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(markdown) => Content::RawMarkdown(markdown.clone()),
            Value::Object(map) => Content::Tree(ContentTree::from_json_object(map)),
            _ => Content::empty(),
        }
    }
}

impl From<&Value> for Content {
    fn from(value: &Value) -> Self {
        Content::from_json(value)
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        Content::from_json(&value)
    }
}

impl ContentTree {
    fn from_json_object(map: &Map<String, Value>) -> Self {
        match map.get("root") {
            Some(root @ Value::Object(_)) => ContentTree::new(ContentNode::from_json(root)),
            _ => ContentTree::default(),
        }
    }
}

impl ContentNode {
    pub fn from_json(value: &Value) -> Self {
        let Value::Object(node) = value else {
            return ContentNode::Unknown {
                kind: String::new(),
                children: Vec::new(),
            };
        };

        let kind = node.get("type").and_then(Value::as_str).unwrap_or_default();
        match kind {
            "root" => ContentNode::Root {
                children: children_of(node),
            },
            "paragraph" => ContentNode::Paragraph {
                children: children_of(node),
            },
            "heading" => ContentNode::Heading {
                tag: string_attr(node, "tag"),
                children: children_of(node),
            },
            "list" => ContentNode::List {
                list_type: ListType::from_attr(node.get("listType").and_then(Value::as_str)),
                children: children_of(node),
            },
            "listitem" => ContentNode::ListItem {
                children: children_of(node),
            },
            "quote" => ContentNode::Quote {
                children: children_of(node),
            },
            "code" => ContentNode::Code {
                language: string_attr(node, "language"),
                children: children_of(node),
            },
            "link" => ContentNode::Link {
                url: link_attr(node, "url").and_then(non_empty_string),
                new_tab: link_attr(node, "newTab").is_some_and(is_truthy),
                children: children_of(node),
            },
            "linebreak" => ContentNode::LineBreak,
            "horizontalrule" => ContentNode::HorizontalRule {
                children: children_of(node),
            },
            "text" => ContentNode::Text(TextNode {
                text: node
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                format: node.get("format").map(format_bits).unwrap_or_default(),
            }),
            other => ContentNode::Unknown {
                kind: other.to_string(),
                children: children_of(node),
            },
        }
    }
}

impl From<&Value> for ContentNode {
    fn from(value: &Value) -> Self {
        ContentNode::from_json(value)
    }
}

fn children_of(node: &Map<String, Value>) -> Vec<ContentNode> {
    match node.get("children") {
        Some(Value::Array(children)) => children.iter().map(ContentNode::from_json).collect(),
        _ => Vec::new(),
    }
}

fn string_attr(node: &Map<String, Value>, key: &str) -> Option<String> {
    node.get(key).and_then(non_empty_string)
}

fn link_attr<'a>(node: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    let nested = node
        .get("fields")
        .and_then(Value::as_object)
        .and_then(|fields| fields.get(key))
        .filter(|v| is_truthy(v));
    nested.or_else(|| node.get(key))
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// The mask is read the way the editor's bitwise `&` reads it: truncated to an
/// integer and wrapped to 32 bits, so `-1` sets every flag. Non-numbers and
/// non-finite values are 0.
fn format_bits(value: &Value) -> TextFormat {
    let bits = if let Some(n) = value.as_i64() {
        n as u32
    } else if let Some(n) = value.as_u64() {
        n as u32
    } else {
        value
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc().rem_euclid(4_294_967_296.0) as u32)
            .unwrap_or(0)
    };
    TextFormat::from_bits(bits)
}

/// JavaScript truthiness, which is how the editor's flags were always read.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
