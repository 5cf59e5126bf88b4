//! Error types for car operations.

use crate::model::ValidationErrors;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while creating, updating or deleting a car.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CarError {
    /// The request body or identifier broke a field rule.
    #[error("Car validation error: {0}")]
    Validation(ValidationErrors),

    /// No car is stored under the identifier.
    #[error("Car not found: {0}")]
    NotFound(Uuid),

    /// The store failed to answer.
    #[error("Car persistence error: {0}")]
    Persistence(String),
}

impl From<ValidationErrors> for CarError {
    fn from(errors: ValidationErrors) -> Self {
        CarError::Validation(errors)
    }
}
