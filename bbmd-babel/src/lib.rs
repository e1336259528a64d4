//! BBCode to Markdown conversion for migrating legacy blog content
//!
//!     The heart of this crate is [`convert`]: a pure function that rewrites BBCode-tagged
//!     text into Markdown, falling back to raw HTML where Markdown has no equivalent
//!     (underline, colour, alignment). It is applied once over every stored post body by
//!     the migration driver (bbmd-migrate), and on demand by the bbmd CLI.
//!
//!     This is a pure lib, that is, it powers bbmd-cli and bbmd-migrate but is shell
//!     agnostic: no code here prints, reads env vars or touches the filesystem.
//!
//! Architecture
//!
//!     Markdown is the pivot. Each [`Format`] either parses its dialect into a Markdown
//!     [`Document`] or serializes a Markdown [`Document`] into its dialect, and the
//!     [`FormatRegistry`] chains the two:
//!
//!     bbcode ──parse──▶ Document (Markdown) ──serialize──▶ markdown | html
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait and the Markdown Document
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── bbcode              # the converter: rules.rs (table), reflow.rs (quotes, lists)
//!     │   ├── markdown            # identity
//!     │   ├── html                # comrak rendering
//!     │   ├── treeviz             # node tree of the Markdown, for inspection
//!     │   └── common              # shared comrak options
//!     └── lib.rs
//!
//! Core Algorithm
//!
//!     The converter is an ordered list of regex substitutions, each run over the whole
//!     text before the next starts. It is not a parser: same-kind nesting closes early and
//!     unclosed tags are left as text. See formats/bbcode/mod.rs for the mapping table and
//!     the limitations that migrated content already depends on.
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # aggregates the subdirectories
//!     ├── bbcode/<topic>.rs
//!     ├── html/<topic>.rs
//!     └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to
//!     include these in the mod.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::{Document, Format};
pub use formats::bbcode::{convert, convert_with_trace, has_markup, rule_names, RuleHit};
pub use registry::FormatRegistry;
