//! Format trait definition
//!
//! This module defines the core Format trait that all markup formats implement.
//! Markdown is the pivot: parsing turns a source dialect into a Markdown
//! [`Document`], serializing turns that Markdown into the target dialect.

use crate::error::FormatError;
use std::collections::HashMap;

/// Markdown text produced by a parsing format.
///
/// Holds one record's body after conversion. The value is immutable once
/// built; formats that serialize read it through [`Document::as_str`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    markdown: String,
}

impl Document {
    pub fn from_markdown(markdown: impl Into<String>) -> Self {
        Document {
            markdown: markdown.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.markdown
    }

    pub fn into_markdown(self) -> String {
        self.markdown
    }

    pub fn is_empty(&self) -> bool {
        self.markdown.is_empty()
    }
}

/// Trait for markup formats
///
/// Formats can support parsing (source → Markdown), serialization
/// (Markdown → target), or both.
///
/// # Examples
///
/// ```ignore
/// struct Shouting;
///
/// impl Format for Shouting {
///     fn name(&self) -> &str {
///         "shouting"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
///         Ok(doc.as_str().to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "bbcode", "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Markdown)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Markdown → target)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a Markdown document
    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a Markdown document into this format
    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a document, optionally using extra parameters.
    ///
    /// Formats without options can rely on the default implementation, which
    /// delegates to [`Format::serialize`] and rejects any parameter.
    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
