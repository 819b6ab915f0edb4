//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for reading content from text and
//! serializing content to text.

use crate::error::FormatError;
use crate::tree::Content;
use std::collections::HashMap;

/// Trait for content formats
///
/// Formats can support parsing (text → [`Content`]), serialization
/// ([`Content`] → text), or both.
///
/// # Examples
///
/// ```ignore
/// struct PlainText;
///
/// impl Format for PlainText {
///     fn name(&self) -> &str {
///         "plain"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, content: &Content) -> Result<String, FormatError> {
///         Ok(folio_babel::tree_to_markdown(content))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["json"], ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Content)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Content → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into Content
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Content, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize Content into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _content: &Content) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize Content, optionally using extra parameters.
    ///
    /// Formats without parameters can rely on the default implementation,
    /// which delegates to [`Format::serialize`] and rejects any parameter.
    fn serialize_with_options(
        &self,
        content: &Content,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(content)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
