//! Cross-cutting error types for Travel Genie.
//!
//! Domain-specific errors (e.g., `StoreError`, `GeoError`) are defined in
//! their respective crates. The binary converges them with `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Genie crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (blank names, out-of-range coordinates).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    #[must_use]
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
