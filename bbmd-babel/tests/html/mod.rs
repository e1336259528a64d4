//! HTML rendering tests
//!
//! BBCode → Markdown → HTML through the registry.

mod render;
