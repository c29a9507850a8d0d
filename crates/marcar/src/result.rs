//! Result and error types for Marcar.

use thiserror::Error;

/// Result type for Marcar operations
pub type MarcarResult<T> = Result<T, MarcarError>;

/// Errors that can occur while composing test identifiers
#[derive(Debug, Error)]
pub enum MarcarError {
    /// Malformed branch set passed to the enablement switch
    #[error("Invalid switch structure: {message}")]
    Structure {
        /// What was missing or duplicated
        message: String,
    },

    /// The supplied content is not exactly one renderable node
    #[error("Invalid child: {message}")]
    InvalidChild {
        /// Error message
        message: String,
    },

    /// More than one sibling node where exactly one is required
    #[error("Expected exactly one child node, got {count}")]
    MultipleChildren {
        /// Number of nodes supplied
        count: usize,
    },

    /// A transparent grouping placeholder cannot carry an attribute
    #[error("Fragment cannot carry a test-id attribute; use a concrete node")]
    FragmentNotAllowed,
}
