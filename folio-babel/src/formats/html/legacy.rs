//! Legacy Markdown → HTML rendering
//!
//! Posts imported before the rich-text editor store their body as Markdown.
//! Those are rendered with `comrak`, the same CommonMark implementation the
//! rest of the crate relies on for Markdown.

use comrak::{markdown_to_html, ComrakOptions};

/// Options for rendering legacy Markdown bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyMarkdownOptions {
    /// Pass raw HTML in the Markdown through instead of omitting it.
    pub allow_raw_html: bool,
    pub strikethrough: bool,
    pub tables: bool,
    pub autolink: bool,
}

impl Default for LegacyMarkdownOptions {
    fn default() -> Self {
        Self {
            allow_raw_html: false,
            strikethrough: true,
            tables: true,
            autolink: true,
        }
    }
}

impl LegacyMarkdownOptions {
    fn to_comrak(&self) -> ComrakOptions<'static> {
        let mut options = ComrakOptions::default();
        options.extension.strikethrough = self.strikethrough;
        options.extension.table = self.tables;
        options.extension.autolink = self.autolink;
        // Imported posts may still carry their front matter block.
        options.extension.front_matter_delimiter = Some("---".to_string());
        options.render.unsafe_ = self.allow_raw_html;
        options
    }
}

/// Render a Markdown string to an HTML fragment.
pub fn render_legacy_markdown(markdown: &str, options: &LegacyMarkdownOptions) -> String {
    markdown_to_html(markdown, &options.to_comrak())
}
