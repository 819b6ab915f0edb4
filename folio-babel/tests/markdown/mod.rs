//! Markdown format tests
//!
//! Tests for content tree → Markdown conversion.

mod export;
