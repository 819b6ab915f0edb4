//! JSON format implementation
//!
//! Reads post content as the document database stores it: either a JSON
//! string (legacy Markdown) or the editor's tree object `{ "root": { ... } }`.
//! A whole post record is also accepted, in which case its `content` field is
//! used.
//!
//! Only invalid JSON syntax is an error. Any well-formed value maps to some
//! [`Content`] following the rules in [`crate::tree::json`].

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::Content;
use serde_json::Value;

/// Format implementation for editor JSON
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Rich-text editor JSON (content tree or post record)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Content, FormatError> {
        let value: Value =
            serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))?;
        Ok(content_of(&value))
    }
}

/// Post records wrap the tree in a `content` field; bare trees carry `root`.
fn content_of(value: &Value) -> Content {
    match value.get("content") {
        Some(content) if value.get("root").is_none() => Content::from_json(content),
        _ => Content::from_json(value),
    }
}
