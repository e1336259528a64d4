//! Format implementations
//!
//! Markup dialects that convert to and from the Markdown pivot, plus the
//! diagnostic tree view over it.

pub mod bbcode;
pub mod common;
pub mod html;
pub mod icons;
pub mod markdown;
pub mod treeviz;

pub use bbcode::BbcodeFormat;
pub use html::{HtmlFormat, HtmlOptions};
pub use markdown::MarkdownFormat;
