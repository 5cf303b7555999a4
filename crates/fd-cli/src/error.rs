use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use fd_auth::AuthError;
use fd_client::ClientError;
use fd_config::ConfigError;
use fd_core::{CoreError, View};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("Invalid input: {0}")]
    Validation(#[from] CoreError),

    #[error("{source}")]
    Client {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Login failed {location}")]
    LoginFailed { location: ErrorLocation },

    #[error("Not logged in; run `fibro login` first {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("The '{view}' view is not available to your role {location}")]
    ViewDenied { view: View, location: ErrorLocation },

    #[error("Failed to read {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Error serializing response: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    #[track_caller]
    pub fn login_failed() -> Self {
        Self::LoginFailed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn view_denied(view: View) -> Self {
        Self::ViewDenied {
            view,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for CliError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        Self::Client {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
