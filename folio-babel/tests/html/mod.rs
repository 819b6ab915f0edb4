//! HTML format tests
//!
//! Tests for content tree → HTML conversion, including legacy Markdown.

mod export;
mod legacy;
