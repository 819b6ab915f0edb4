//! HTML format implementation
//!
//! This module implements export of post content to HTML fragments for the
//! public article pages.
//!
//! # Element Mapping Table
//!
//! | Content node     | HTML                                                     | Notes                                     |
//! |------------------|----------------------------------------------------------|-------------------------------------------|
//! | root             | children                                                 | No wrapper                                |
//! | paragraph        | `<p>`                                                    |                                           |
//! | heading          | `<hN>`                                                   | Tag used verbatim, `h2` when absent       |
//! | list             | `<ul>` / `<ol>`                                          | `listType: "number"` selects `<ol>`       |
//! | listitem         | `<li>`                                                   |                                           |
//! | quote            | `<blockquote>`                                           |                                           |
//! | code             | `<pre><code>`                                            | Language hint is not emitted              |
//! | link             | `<a href>`                                               | `target`/`rel` only for new-tab links     |
//! | linebreak        | `<br>`                                                   |                                           |
//! | horizontalrule   | `<hr>`                                                   | Children are not rendered                 |
//! | text             | `<strong>`, `<em>`, `<s>`, `<u>`, `<code>`               | Nested in flag order, bold innermost      |
//! | unknown kinds    | children                                                 |                                           |
//!
//! # Legacy Content
//!
//! Content stored as a Markdown string does not go through the tree walk. It
//! is rendered by `comrak` (see [`legacy`]) with [`LegacyMarkdownOptions`].
//!
//! # Escaping
//!
//! Text and attribute values are escaped. Heading tags are taken verbatim
//! from the editor's node.

pub mod legacy;
mod serializer;

pub use legacy::{render_legacy_markdown, LegacyMarkdownOptions};
pub use serializer::{convert_text, node_to_html, serialize_to_html};

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::Content;
use std::collections::HashMap;

/// Options for HTML serialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// How string (legacy Markdown) content is rendered
    pub legacy: LegacyMarkdownOptions,
}

impl HtmlOptions {
    pub fn new(legacy: LegacyMarkdownOptions) -> Self {
        Self { legacy }
    }

    /// Apply `--extra-*` style string options on top of these options.
    ///
    /// Recognized keys: `raw-html`, `strikethrough`, `tables`, `autolink`.
    pub fn with_params(mut self, params: &HashMap<String, String>) -> Result<Self, FormatError> {
        for (key, value) in params {
            let target = match key.as_str() {
                "raw-html" => &mut self.legacy.allow_raw_html,
                "strikethrough" => &mut self.legacy.strikethrough,
                "tables" => &mut self.legacy.tables,
                "autolink" => &mut self.legacy.autolink,
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'html' does not support parameter '{other}'"
                    )))
                }
            };
            *target = parse_bool_param(key, value)?;
        }
        Ok(self)
    }
}

fn parse_bool_param(key: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(FormatError::SerializationError(format!(
            "Invalid boolean value '{other}' for parameter '{key}'"
        ))),
    }
}

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment for article pages"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, content: &Content) -> Result<String, FormatError> {
        Ok(serialize_to_html(content, &self.options))
    }

    fn serialize_with_options(
        &self,
        content: &Content,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = self.options.clone().with_params(options)?;
        Ok(serialize_to_html(content, &options))
    }
}
