//! Markdown format implementation
//!
//! Markdown is the pivot of every conversion, so both directions are the
//! identity. Registering it lets already-converted content flow through the
//! same commands as BBCode (e.g. `bbmd post.md --to html`).

use crate::error::FormatError;
use crate::format::{Document, Format};

/// Format implementation for Markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown with GFM extensions"
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

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(Document::from_markdown(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut text = doc.as_str().to_string();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        Ok(text)
    }
}
