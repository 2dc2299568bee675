//! Cross-cutting error types for Labnet.
//!
//! This module defines errors that can originate from any crate in the system.
//! Domain-specific errors (e.g., `AuthError`, `SearchError`) are defined in
//! their respective crates and wrap `CoreError` where a local rule is broken.

use thiserror::Error;

/// Errors that can be raised by any Labnet crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// An operation was attempted while the owning state machine was in a
    /// state that does not allow it (e.g. committing with no draft staged).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A required field is empty or malformed. The operation was refused and
    /// nothing was mutated.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Whether this error is a refused-input validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
