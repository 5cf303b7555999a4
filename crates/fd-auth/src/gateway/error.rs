use crate::credential_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use fd_client::ClientError;
use thiserror::Error;

/// Failures surfaced by the auth gateway.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Bearer credential rejected: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: ClientError,
    },

    #[error("Credential storage failed: {source} {location}")]
    Storage {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network(source: ClientError) -> Self {
        Self::Network {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// Map a failed login call.
    ///
    /// The backend answering with any non-success status means the
    /// credentials were refused; everything else is a transport problem.
    #[track_caller]
    pub fn from_login_failure(err: ClientError) -> Self {
        match err {
            ClientError::Api { .. } => Self::invalid_credentials(),
            other => Self::network(other),
        }
    }

    /// Map a failed current-user call.
    #[track_caller]
    pub fn from_resolve_failure(err: ClientError) -> Self {
        match err {
            ClientError::Api { message, .. } => Self::invalid_token(message),
            other => Self::network(other),
        }
    }

    /// True for a refusal by the backend, as opposed to a failure to reach it
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. } | Self::InvalidToken { .. }
        )
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
