//! The content tree model
//!
//!     Posts are authored in a rich-text editor that saves its internal document
//!     tree as JSON. This module gives that tree a closed, typed shape: every node
//!     kind the converters understand is a variant of [`ContentNode`], and anything
//!     else lands in [`ContentNode::Unknown`] with its children preserved, so newer
//!     editor node kinds still render their text.
//!
//!     Content can also be a plain Markdown string (posts imported before the
//!     editor existed). [`Content`] is the single boundary type covering both
//!     shapes, resolved once when the JSON value is read.
//!
//!     Building a tree from JSON never fails. See [`json`] for the decoding rules.
//!
//!     Trees are walked recursively by the serializers. Depth is bounded by what
//!     the editor produces; JSON text parsed with `serde_json` is additionally
//!     capped by its recursion limit.

pub mod flags;
pub mod json;

pub use flags::TextFormat;

/// Ordering of a list node, read from the `listType` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    #[default]
    Bullet,
    Number,
}

impl ListType {
    /// `"number"` selects an ordered list, every other value a bullet list.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("number") => ListType::Number,
            _ => ListType::Bullet,
        }
    }

    pub fn is_ordered(self) -> bool {
        matches!(self, ListType::Number)
    }
}

/// A literal run of text with its formatting flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextNode {
    pub text: String,
    pub format: TextFormat,
}

impl TextNode {
    pub fn new(text: impl Into<String>, format: TextFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextFormat::empty())
    }
}

/// A node of the editor's document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    Root {
        children: Vec<ContentNode>,
    },
    Paragraph {
        children: Vec<ContentNode>,
    },
    /// `tag` is kept verbatim (`"h1"`..`"h6"` in practice); each serializer
    /// applies its own default when it is absent.
    Heading {
        tag: Option<String>,
        children: Vec<ContentNode>,
    },
    List {
        list_type: ListType,
        children: Vec<ContentNode>,
    },
    ListItem {
        children: Vec<ContentNode>,
    },
    Quote {
        children: Vec<ContentNode>,
    },
    Code {
        language: Option<String>,
        children: Vec<ContentNode>,
    },
    Link {
        url: Option<String>,
        new_tab: bool,
        children: Vec<ContentNode>,
    },
    LineBreak,
    /// Markdown has no rule for these, so only their children render there.
    HorizontalRule {
        children: Vec<ContentNode>,
    },
    Text(TextNode),
    /// A node kind this crate does not know about. Only its children render.
    Unknown {
        kind: String,
        children: Vec<ContentNode>,
    },
}

impl ContentNode {
    /// The ordered children of this node. Leaves have none.
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Root { children }
            | ContentNode::Paragraph { children }
            | ContentNode::Heading { children, .. }
            | ContentNode::List { children, .. }
            | ContentNode::ListItem { children }
            | ContentNode::Quote { children }
            | ContentNode::Code { children, .. }
            | ContentNode::Link { children, .. }
            | ContentNode::HorizontalRule { children }
            | ContentNode::Unknown { children, .. } => children,
            ContentNode::LineBreak | ContentNode::Text(_) => &[],
        }
    }

    /// The `type` name used by the editor's JSON for this node.
    pub fn kind(&self) -> &str {
        match self {
            ContentNode::Root { .. } => "root",
            ContentNode::Paragraph { .. } => "paragraph",
            ContentNode::Heading { .. } => "heading",
            ContentNode::List { .. } => "list",
            ContentNode::ListItem { .. } => "listitem",
            ContentNode::Quote { .. } => "quote",
            ContentNode::Code { .. } => "code",
            ContentNode::Link { .. } => "link",
            ContentNode::LineBreak => "linebreak",
            ContentNode::HorizontalRule { .. } => "horizontalrule",
            ContentNode::Text(_) => "text",
            ContentNode::Unknown { kind, .. } => kind,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        ContentNode::Text(TextNode::plain(text))
    }

    pub fn formatted_text(text: impl Into<String>, format: TextFormat) -> Self {
        ContentNode::Text(TextNode::new(text, format))
    }
}

/// A saved editor document. `root` is `None` when the value carried no usable root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentTree {
    pub root: Option<ContentNode>,
}

impl ContentTree {
    pub fn new(root: ContentNode) -> Self {
        Self { root: Some(root) }
    }

    /// A tree rooted at a `root` node holding `children`.
    pub fn from_children(children: Vec<ContentNode>) -> Self {
        Self::new(ContentNode::Root { children })
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

/// Post content as stored: legacy Markdown text or an editor tree.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum Content {
    RawMarkdown(String),
    Tree(ContentTree),
}

impl Content {
    pub fn markdown(text: impl Into<String>) -> Self {
        Content::RawMarkdown(text.into())
    }

    /// Content with nothing to render.
    pub fn empty() -> Self {
        Content::Tree(ContentTree::default())
    }

    pub fn is_raw_markdown(&self) -> bool {
        matches!(self, Content::RawMarkdown(_))
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::empty()
    }
}

impl From<ContentTree> for Content {
    fn from(tree: ContentTree) -> Self {
        Content::Tree(tree)
    }
}
