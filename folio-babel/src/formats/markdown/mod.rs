//! Markdown format implementation
//!
//! This module implements export of post content to Markdown, used by the
//! admin API (the editor's source view) and by content exports.
//!
//! # Element Mapping Table
//!
//! | Content node     | Markdown                      | Notes                                          |
//! |------------------|-------------------------------|------------------------------------------------|
//! | root             | children                      | No wrapper                                     |
//! | paragraph        | text + blank line             | Blank paragraphs collapse to a single newline  |
//! | heading          | `#` × level                   | Level from tag (`h3` → 3), default 1, max 6    |
//! | list             | `- item` / `1. item`          | One line per declared item, even empty ones    |
//! | listitem         | children                      | Marker added by the parent list                |
//! | quote            | `> ` on every line            |                                                |
//! | code             | fenced block                  | Language hint on the opening fence             |
//! | link             | `[label](url)`                | URL doubles as label when there are no children |
//! | linebreak        | two spaces + newline          | Hard break                                     |
//! | horizontalrule   | children                      | No Markdown rule of its own                    |
//! | text             | `**`, `*`, `~~`, `` ` ``      | Underline is dropped                           |
//! | unknown kinds    | children                      |                                                |
//!
//! # Lossy Conversions
//!
//! - Underlined text loses its underline.
//! - Nested lists flatten into the parent item's line.
//! - Link targets (new tab) are not representable.
//!
//! # Parsing
//!
//! There is no Markdown → tree path. "Parsing" Markdown yields legacy
//! content ([`Content::RawMarkdown`]), which every serializer understands.

pub mod serializer;

pub use serializer::{node_to_markdown, serialize_to_markdown};

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::Content;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown (legacy post bodies and editor export)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Content, FormatError> {
        Ok(Content::markdown(source))
    }

    fn serialize(&self, content: &Content) -> Result<String, FormatError> {
        Ok(serialize_to_markdown(content))
    }
}
