//! BBCode conversion tests
//!
//! Tests for the BBCode → Markdown rule pipeline.

mod blocks;
mod inline;
mod kitchensink;
mod limitations;
mod properties;
