//! Format implementations
//!
//! This module contains the format implementations that read post content
//! and render it to text representations.

pub mod html;
pub mod json;
pub mod markdown;

pub use html::{HtmlFormat, HtmlOptions, LegacyMarkdownOptions};
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
