use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid view: {value} {location}")]
    InvalidView {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid fibrosis stage: {value} (expected 0-4) {location}")]
    InvalidFibrosisStage { value: i64, location: ErrorLocation },
}

impl CoreError {
    /// Create a field-level validation error at the caller location
    #[track_caller]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Name of the offending field, for form-level display
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            Self::InvalidRole { .. } => Some("role"),
            Self::InvalidFibrosisStage { .. } => Some("resultat"),
            Self::InvalidView { .. } => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
