//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The start address is empty
    #[error("Start address is required")]
    MissingStartAddress,

    /// The end address is empty
    #[error("End address is required")]
    MissingEndAddress,

    /// No travel mode was selected
    #[error("Travel mode is required")]
    MissingTravelMode,

    /// A travel mode name or profile outside the fixed set
    #[error("Unknown travel mode: {0}")]
    UnknownTravelMode(String),

    /// An origin name other than start/end
    #[error("Unknown origin: {0}")]
    UnknownOrigin(String),

    /// Latitude or longitude out of range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Returns true for the three route-request validation failures
    #[must_use]
    pub const fn is_missing_field(&self) -> bool {
        matches!(
            self,
            Self::MissingStartAddress | Self::MissingEndAddress | Self::MissingTravelMode
        )
    }
}
