//! HTML format implementation
//!
//! Renders the Markdown pivot to an HTML fragment, which is how converted
//! posts end up on the timeline. Serialization only.
//!
//! # Library Choice
//!
//! We use `comrak` for rendering, the same crate that reads Markdown
//! elsewhere in the workspace, so what the preview shows is what a
//! CommonMark/GFM renderer will show.
//!
//! # Raw HTML
//!
//! The converter emits raw HTML for constructs Markdown cannot express
//! (`<u>`, `<span style>`, `<center>`, `<div align>`). Those only survive
//! rendering when raw HTML is allowed, which is the default. With
//! `unsafe=false` comrak replaces them with `<!-- raw HTML omitted -->`.
//!
//! # Options
//!
//! | key          | default | effect                                  |
//! |--------------|---------|-----------------------------------------|
//! | `unsafe`     | `true`  | pass raw HTML through                   |
//! | `hardbreaks` | `false` | render single newlines as `<br />`      |

use super::common::comrak_options;
use crate::error::FormatError;
use crate::format::{Document, Format};
use std::collections::HashMap;

/// Rendering switches for [`HtmlFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    pub allow_raw_html: bool,
    pub hardbreaks: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        HtmlOptions {
            allow_raw_html: true,
            hardbreaks: false,
        }
    }
}

impl HtmlOptions {
    /// Apply string parameters on top of these options.
    pub fn with_params(mut self, params: &HashMap<String, String>) -> Result<Self, FormatError> {
        for (key, value) in params {
            match key.as_str() {
                "unsafe" => self.allow_raw_html = parse_bool(key, value)?,
                "hardbreaks" => self.hardbreaks = parse_bool(key, value)?,
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'html' does not support parameter '{other}'"
                    )))
                }
            }
        }
        Ok(self)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(FormatError::SerializationError(format!(
            "Invalid boolean value '{other}' for '{key}'"
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
        HtmlFormat { options }
    }

    pub fn options(&self) -> HtmlOptions {
        self.options
    }
}

/// Render Markdown to HTML with explicit options.
pub fn render_html(markdown: &str, options: HtmlOptions) -> String {
    let comrak = comrak_options(options.allow_raw_html, options.hardbreaks);
    comrak::markdown_to_html(markdown, &comrak)
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment rendered from the converted Markdown"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(render_html(doc.as_str(), self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = self.options.with_params(options)?;
        Ok(render_html(doc.as_str(), options))
    }
}
