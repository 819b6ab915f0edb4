//! Content conversion for the folio blog platform
//!
//!     Posts are written in a rich-text editor that stores its document as a JSON
//!     tree. Older posts were imported as plain Markdown strings. This crate turns
//!     either kind of stored content into Markdown (the admin editor's source view,
//!     exports) or HTML (the public article pages).
//!
//!     TLDR:
//!         - [`tree_to_markdown`] and [`tree_to_html`] are the two converters. Both are
//!           total: any input yields a string, malformed parts degrade to nothing.
//!         - Stored JSON is read into [`Content`] once, at the boundary
//!           ([`Content::from_json`]). Everything downstream matches on a closed enum.
//!         - Legacy Markdown strings pass through the Markdown converter untouched and
//!           are rendered to HTML by `comrak`.
//!
//!     This is a pure lib: no code here assumes a shell, reads env vars or prints.
//!     The `folio` CLI wraps it.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── tree                    # Content tree model and JSON decoding
//!     ├── formats
//!     │   ├── json                # Stored JSON → Content
//!     │   ├── markdown            # Content → Markdown
//!     │   └── html                # Content → HTML (+ legacy Markdown via comrak)
//!     ├── post.rs                 # Post records and their public/admin views
//!     └── migrate.rs              # Import of legacy Markdown post files
//!
//! Testing
//!     tests
//!     └── <format>
//!         ├── <testname>.rs
//!         └── fixtures
//!             └── <docname>.json
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait, see [`format`].
//!     The registry gives the CLI a uniform way to pick a reader and a writer by name or by
//!     file extension. Only `json` and `markdown` read; only `markdown` and `html` write.
//!     There is no Markdown or HTML → tree path: editing happens in the editor.
//!
//! Threading
//!
//!     Conversion holds no state. Trees are plain owned data (`Send + Sync`), so any
//!     number of posts can be converted concurrently. With the `parallel` feature,
//!     [`post::render_feed`] does so with rayon.

pub mod error;
pub mod format;
pub mod formats;
pub mod migrate;
pub mod post;
pub mod registry;
pub mod tree;

pub use error::{FormatError, MigrateError};
pub use format::Format;
pub use formats::html::{HtmlOptions, LegacyMarkdownOptions};
pub use registry::FormatRegistry;
pub use tree::{Content, ContentNode, ContentTree, ListType, TextFormat, TextNode};

/// Convert content to Markdown.
///
/// Legacy Markdown strings are returned unchanged. A tree without a root
/// yields the empty string.
pub fn tree_to_markdown(content: &Content) -> String {
    formats::markdown::serialize_to_markdown(content)
}

/// Convert content to an HTML fragment with default options.
///
/// Legacy Markdown strings are rendered by `comrak`. A tree without a root
/// yields the empty string.
pub fn tree_to_html(content: &Content) -> String {
    tree_to_html_with_options(content, &HtmlOptions::default())
}

pub fn tree_to_html_with_options(content: &Content, options: &HtmlOptions) -> String {
    formats::html::serialize_to_html(content, options)
}
