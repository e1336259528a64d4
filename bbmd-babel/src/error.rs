//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
///
/// Converting BBCode never fails; these only come from registry lookups,
/// unsupported directions and rendering options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested direction or option
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
