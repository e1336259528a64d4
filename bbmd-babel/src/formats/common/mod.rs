//! Common utilities for Markdown-backed formats
//!
//! The HTML renderer and the tree visualization both go through comrak, so
//! they share one set of parsing extensions.

use comrak::ComrakOptions;

/// Comrak options matching what the converter emits: GFM strikethrough for
/// `[s]`, autolinks for `[url]`, tables for content written after migration.
pub fn comrak_options(allow_raw_html: bool, hardbreaks: bool) -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.render.unsafe_ = allow_raw_html;
    options.render.hardbreaks = hardbreaks;
    options
}
