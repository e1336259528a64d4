//! BBCode format implementation
//!
//! Converts legacy BBCode post bodies into Markdown. Conversion is one-way:
//! BBCode is only ever read, never written.
//!
//! # Element Mapping Table
//!
//! | BBCode                         | Markdown                          | Notes                                |
//! |--------------------------------|-----------------------------------|--------------------------------------|
//! | `[b]x[/b]`                     | `**x**`                           |                                      |
//! | `[i]x[/i]`                     | `*x*`                             |                                      |
//! | `[u]x[/u]`                     | `<u>x</u>`                        | no Markdown underline, raw HTML      |
//! | `[s]x[/s]`                     | `~~x~~`                           | GFM strikethrough                    |
//! | `[code]x[/code]`               | `` `x` ``                         | inline                               |
//! | `[pre]x[/pre]`                 | fenced block                      |                                      |
//! | `[url=h]t[/url]`, `[url]h[/url]` | `[t](h)`, `<h>`                 |                                      |
//! | `[img]s[/img]`, `[img=a]s[/img]` | `![](s)`, `![a](s)`             |                                      |
//! | `[quote]`, `[quote=who]`       | `> ` prefixed lines               | attributed form adds `> **who:**`    |
//! | `[list]`, `[list=1]` + `[*]`   | `- item`, `1. item`               |                                      |
//! | `[h1]`..`[h3]`                 | `#`..`###`                        | on their own line                    |
//! | `[color=v]x[/color]`           | `<span style="color:v">x</span>`  | value is not sanitised               |
//! | `[size=n]x[/size]`, `[left]`   | `x`                               | tag dropped, content kept            |
//! | `[center]`, `[right]`          | `<center>`, `<div align="right">` | raw HTML                             |
//!
//! # Known Limitations
//!
//! The conversion is a pipeline of regex passes, not a parser. Nested tags of
//! the same kind close at the first closing tag: `[b]a[b]b[/b]c[/b]` becomes
//! `**a[b]b**c[/b]`. Existing migrated content depends on this output, so it
//! is kept as is. Unclosed tags are left untouched.

mod reflow;
mod rules;

use crate::error::FormatError;
use crate::format::{Document, Format};
use rules::{KNOWN_TAG, RULES};
use serde::Serialize;

/// How many replacements a single rule made during a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub rule: &'static str,
    pub matches: usize,
}

/// Convert BBCode text to Markdown.
///
/// Total over all input: unknown or unbalanced tags pass through, and the
/// result is trimmed of leading and trailing whitespace.
pub fn convert(source: &str) -> String {
    run_pipeline(source, |_| {})
}

/// Same as [`convert`], also reporting which rules fired and how often.
///
/// Rules without matches are left out of the trace.
pub fn convert_with_trace(source: &str) -> (String, Vec<RuleHit>) {
    let mut trace = Vec::new();
    let markdown = run_pipeline(source, |hit| trace.push(hit));
    (markdown, trace)
}

/// Cheap pre-scan: does the text contain any tag the converter knows?
pub fn has_markup(source: &str) -> bool {
    KNOWN_TAG.is_match(source)
}

/// Names of the conversion rules, in application order.
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|rule| rule.name).collect()
}

fn run_pipeline(source: &str, mut on_hit: impl FnMut(RuleHit)) -> String {
    let mut text = source.to_owned();
    for rule in RULES.iter() {
        let (rewritten, matches) = rule.apply(&text);
        if matches > 0 {
            let rewritten = rewritten.into_owned();
            on_hit(RuleHit {
                rule: rule.name,
                matches,
            });
            text = rewritten;
        }
    }
    text.trim().to_owned()
}

/// Format implementation for BBCode (parse only)
#[derive(Debug, Clone, Copy, Default)]
pub struct BbcodeFormat;

impl Format for BbcodeFormat {
    fn name(&self) -> &str {
        "bbcode"
    }

    fn description(&self) -> &str {
        "Legacy forum/blog BBCode markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["bbcode", "bb"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(Document::from_markdown(convert(source)))
    }
}
